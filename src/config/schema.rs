//! Configuration schema types
//!
//! This module defines the structure of the optional TOML configuration file.

use crate::core::output::DEFAULT_OUTPUT_SUFFIX;
use crate::domain::delimiter::{parse_byte, Delimiter};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// Every section and field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Delimited file settings
    #[serde(default)]
    pub csv: CsvConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FileConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.csv.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Delimited file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field delimiter used when `--delimiter` is not given
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl CsvConfig {
    fn validate(&self) -> Result<(), String> {
        parse_byte(&self.delimiter)
            .map(|_| ())
            .map_err(|e| format!("csv.delimiter: {e}"))
    }

    /// Parsed delimiter
    pub fn delimiter(&self) -> crate::domain::Result<Delimiter> {
        Delimiter::new(&self.delimiter)
    }
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Inserted before the extension of the derived output file name
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Exit with a failure status when the output cannot be written
    #[serde(default = "default_true")]
    pub fail_on_write_error: bool,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.suffix.is_empty() {
            return Err("output.suffix cannot be empty".to_string());
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(format!(
                "output.suffix '{}' cannot contain path separators",
                self.suffix
            ));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            fail_on_write_error: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Console log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console log format (text or json)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(format!(
                "Invalid logging.format '{}'. Must be one of: {}",
                self.format,
                valid_formats.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_delimiter() -> String {
    ";".to_string()
}

fn default_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
