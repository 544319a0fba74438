//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable or JSON console output on stderr
//! - Configurable log levels, with `RUST_LOG` as an override
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use csv_anonymizer::logging::init_logging;
//! use csv_anonymizer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Record a failure that has already been reported to the user
///
/// Logged at info level so the default console output carries the plain
/// error line only.
///
/// # Example
///
/// ```no_run
/// use csv_anonymizer::log_failure;
/// use csv_anonymizer::domain::AnonymizerError;
///
/// let error = AnonymizerError::ColumnNotFound("city".to_string());
/// log_failure!(&error, "Anonymization run failed");
/// ```
#[macro_export]
macro_rules! log_failure {
    ($error:expr, $context:expr) => {
        tracing::info!(
            error = %$error,
            exit_code = $error.exit_code(),
            context = $context,
            "Run failed"
        );
    };
}
