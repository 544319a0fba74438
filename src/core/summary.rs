//! Run summary and reporting
//!
//! This module defines the structure returned by a completed pipeline run.

use crate::anonymization::ColumnReport;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Input file
    pub input: PathBuf,

    /// File the result was written to
    pub output: PathBuf,

    /// Number of data rows written
    pub rows: usize,

    /// One report per transformed column, in application order
    pub columns: Vec<ColumnReport>,

    /// Duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a new summary with no column reports
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            rows: 0,
            columns: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a transformed column
    pub fn add_column(&mut self, report: ColumnReport) {
        self.columns.push(report);
    }

    /// Line announcing where the result was saved
    pub fn saved_message(&self) -> String {
        format!("Anonymized data saved to {}", self.output.display())
    }

    /// Confirmation lines for the user, one per column plus the saved path
    pub fn messages(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.columns.iter().map(ColumnReport::confirmation).collect();
        lines.push(self.saved_message());
        lines
    }
}
