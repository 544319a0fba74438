// CSV Anonymizer - column pseudonymization and redaction for delimited files
// Copyright (c) 2025 CSV Anonymizer Contributors
// Licensed under the MIT License

//! # CSV Anonymizer
//!
//! Reads a delimited text file, replaces the values of one column with stable
//! per-value integer ids, optionally blanks out a second column, and writes
//! the result to a new file.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pipeline sequencing, output naming, run summary
//! - [`anonymization`] - Column strategies (pseudonymize, redact)
//! - [`adapters`] - Delimited file reader and writer
//! - [`domain`] - Table, delimiter and error types
//! - [`config`] - Optional TOML configuration
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csv_anonymizer::core::{run, RunConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig::new("data.csv").anonymize("customer").remove("notes");
//!     let summary = run(&config)?;
//!
//!     for line in summary.messages() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Id Assignment
//!
//! Ids start at 1 and follow the order in which distinct values first appear,
//! top to bottom. Running the tool twice on the same file gives the same ids.
//!
//! ```rust
//! use csv_anonymizer::anonymization::anonymize;
//! use csv_anonymizer::domain::Table;
//!
//! # fn example() -> csv_anonymizer::domain::Result<()> {
//! let mut table = Table::from_rows(
//!     vec!["id".into(), "city".into()],
//!     vec![
//!         vec!["1".into(), "Paris".into()],
//!         vec!["2".into(), "Paris".into()],
//!         vec!["3".into(), "Lyon".into()],
//!     ],
//! )?;
//! anonymize(&mut table, "city")?;
//! assert_eq!(table.column("city").unwrap(), ["1", "1", "2"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::AnonymizerError`]. Each variant maps to a process exit code via
//! [`domain::AnonymizerError::exit_code`].

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
