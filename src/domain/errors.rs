//! Domain error types
//!
//! This module defines the error hierarchy for the anonymizer. Every fallible
//! library operation returns [`AnonymizerError`]; third-party error types are
//! flattened into messages at the boundary where they occur.

use std::path::PathBuf;
use thiserror::Error;

/// Main anonymizer error type
#[derive(Debug, Error)]
pub enum AnonymizerError {
    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A requested column is absent from the header
    #[error("Column '{0}' not found in the CSV file.")]
    ColumnNotFound(String),

    /// Neither an anonymize nor a remove column was requested
    #[error("Usage error: {0}")]
    Usage(String),

    /// Malformed input data
    #[error("Parse error: {0}")]
    Parse(String),

    /// Output serialization failed
    #[error("Error saving file {}: {cause}", .path.display())]
    Write { path: PathBuf, cause: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors outside of the write step
    #[error("I/O error: {0}")]
    Io(String),
}

impl AnonymizerError {
    /// Exit code for failures outside the anonymizer itself, such as a closed stdout
    pub const INTERNAL_EXIT_CODE: i32 = 5;

    /// Creates a write error for `path`
    pub fn write(path: impl Into<PathBuf>, cause: impl ToString) -> Self {
        AnonymizerError::Write {
            path: path.into(),
            cause: cause.to_string(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnonymizerError::Write { .. } => 1,
            AnonymizerError::Usage(_) | AnonymizerError::Configuration(_) => 2,
            AnonymizerError::NotFound(_) | AnonymizerError::Parse(_) | AnonymizerError::Io(_) => 3,
            AnonymizerError::ColumnNotFound(_) => 4,
        }
    }

    /// Returns true for output write failures
    pub fn is_write_failure(&self) -> bool {
        matches!(self, AnonymizerError::Write { .. })
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for AnonymizerError {
    fn from(err: std::io::Error) -> Self {
        AnonymizerError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AnonymizerError {
    fn from(err: toml::de::Error) -> Self {
        AnonymizerError::Configuration(format!("TOML parse error: {err}"))
    }
}
