//! External system integrations.
//!
//! - [`csv`] - Delimited text files on the local filesystem
//!
//! # Design Pattern
//!
//! Adapters isolate third-party I/O crates from the domain layer: they accept
//! and return [`Table`](crate::domain::Table) and report failures as
//! [`AnonymizerError`](crate::domain::AnonymizerError), never as crate-specific
//! error types.

pub mod csv;
