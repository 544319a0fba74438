//! Core pipeline logic.
//!
//! - [`pipeline`] - Reader → anonymize/redact → writer sequencing
//! - [`output`] - Default output path derivation
//! - [`summary`] - Run results

pub mod output;
pub mod pipeline;
pub mod summary;

pub use pipeline::{run, transform, PendingWrite, RunConfig};
pub use summary::RunSummary;
