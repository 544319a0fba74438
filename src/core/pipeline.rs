//! Read, transform and write pipeline
//!
//! [`run`] sequences the reader, the column strategies and the writer for one
//! input file. Everything the run needs is carried in a plain [`RunConfig`].
//!
//! [`transform`] stops before the write and hands back a [`PendingWrite`], so
//! callers can report the column results even when saving fails.
//!
//! # Examples
//!
//! ```no_run
//! use csv_anonymizer::core::pipeline::{run, RunConfig};
//!
//! # fn example() -> csv_anonymizer::domain::Result<()> {
//! let config = RunConfig::new("contracts.csv").anonymize("customer");
//! let summary = run(&config)?;
//! println!("{} rows written to {}", summary.rows, summary.output.display());
//! # Ok(())
//! # }
//! ```

use crate::adapters::csv::{read_table, write_table};
use crate::anonymization::{anonymize, redact, ColumnReport};
use crate::core::output::{default_output_path, DEFAULT_OUTPUT_SUFFIX};
use crate::core::summary::RunSummary;
use crate::domain::{AnonymizerError, Delimiter, Result, Table};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Everything a single pipeline run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Input file
    pub input: PathBuf,

    /// Column to pseudonymize
    pub anonymize_column: Option<String>,

    /// Column to redact
    pub remove_column: Option<String>,

    /// Field delimiter for reading and writing
    pub delimiter: Delimiter,

    /// Explicit output path
    pub output: Option<PathBuf>,

    /// Suffix used to derive the output path when `output` is unset
    pub output_suffix: String,
}

impl RunConfig {
    /// Create a run for `input` with default settings and no columns selected
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            anonymize_column: None,
            remove_column: None,
            delimiter: Delimiter::DEFAULT,
            output: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }

    /// Sets the column to pseudonymize
    pub fn anonymize(mut self, column: impl Into<String>) -> Self {
        self.anonymize_column = Some(column.into());
        self
    }

    /// Sets the column to redact
    pub fn remove(mut self, column: impl Into<String>) -> Self {
        self.remove_column = Some(column.into());
        self
    }

    /// Sets the delimiter
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets an explicit output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Checks that at least one transformation is requested
    ///
    /// # Errors
    ///
    /// Returns `AnonymizerError::Usage` if neither column is set.
    pub fn validate(&self) -> Result<()> {
        if self.anonymize_column.is_none() && self.remove_column.is_none() {
            return Err(AnonymizerError::Usage(
                "You must specify either --column or --remove.".to_string(),
            ));
        }
        Ok(())
    }

    /// Output path, derived from the input when not set explicitly
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(&self.input, &self.output_suffix),
        }
    }
}

/// A transformed table waiting to be saved
#[derive(Debug)]
pub struct PendingWrite {
    table: Table,
    summary: RunSummary,
    delimiter: Delimiter,
    start: Instant,
}

impl PendingWrite {
    /// Reports for the transformed columns, in application order
    pub fn columns(&self) -> &[ColumnReport] {
        &self.summary.columns
    }

    /// Path the table will be written to
    pub fn output(&self) -> &Path {
        &self.summary.output
    }

    /// Write the table and complete the run
    ///
    /// # Errors
    ///
    /// Returns `AnonymizerError::Write` if the output cannot be saved.
    pub fn write(self) -> Result<RunSummary> {
        let PendingWrite {
            table,
            mut summary,
            delimiter,
            start,
        } = self;

        summary.rows = write_table(&table, &summary.output, delimiter)?;
        let summary = summary.with_duration(start.elapsed());

        tracing::info!(
            output = %summary.output.display(),
            rows = summary.rows,
            duration_ms = summary.duration.as_millis(),
            "Anonymization run completed"
        );

        Ok(summary)
    }
}

/// Execute one run
///
/// Steps, in order: validate the request, read the input, pseudonymize,
/// redact, write. When both steps name the same column the redaction wins.
///
/// # Errors
///
/// Validation, read and column errors abort before anything is written. A
/// failed write is returned as `AnonymizerError::Write`.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    transform(config)?.write()
}

/// Run every step except the write
///
/// # Errors
///
/// Returns the validation, read or column error that stopped the run.
pub fn transform(config: &RunConfig) -> Result<PendingWrite> {
    config.validate()?;
    let start = Instant::now();

    tracing::info!(
        input = %config.input.display(),
        delimiter = %config.delimiter,
        anonymize_column = ?config.anonymize_column,
        remove_column = ?config.remove_column,
        "Starting anonymization run"
    );

    let mut table = read_table(&config.input, config.delimiter)?;
    let mut summary = RunSummary::new(config.input.clone(), config.output_path());

    if let Some(column) = &config.anonymize_column {
        summary.add_column(anonymize(&mut table, column)?);
    }

    if let Some(column) = &config.remove_column {
        summary.add_column(redact(&mut table, column)?);
    }

    Ok(PendingWrite {
        table,
        summary,
        delimiter: config.delimiter,
        start,
    })
}
