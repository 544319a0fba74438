//! Anonymization module
//!
//! This module rewrites whole columns of a [`Table`](crate::domain::Table).
//!
//! # Architecture
//!
//! - **Strategies** ([`anonymizer`]): pseudonymization to integer ids and
//!   redaction to a fixed placeholder
//! - **Engine** ([`engine`]): column lookup and strategy application
//! - **Reports** ([`report`]): per-column outcome and confirmation text
//!
//! # Usage
//!
//! ```rust,ignore
//! use csv_anonymizer::anonymization::{anonymize, redact};
//!
//! let report = anonymize(&mut table, "customer_id")?;
//! println!("{}", report.confirmation());
//! ```

pub mod anonymizer;
pub mod config;
pub mod engine;
pub mod report;

// Re-export main types
pub use config::AnonymizationStrategy;
pub use engine::{anonymize, redact};
pub use report::ColumnReport;
