//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::FileConfig;
use crate::domain::errors::AnonymizerError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses the TOML into FileConfig
/// 3. Applies environment variable overrides (ANONYMIZER_* prefix)
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns `AnonymizerError::Configuration` if the file cannot be read or
/// parsed, or if validation fails.
///
/// # Examples
///
/// ```no_run
/// use csv_anonymizer::config::loader::load_config;
///
/// let config = load_config("anonymizer.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FileConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnonymizerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonymizerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: FileConfig = toml::from_str(&contents)?;
    finish(config)
}

/// Loads the configuration file if one is given, defaults otherwise
///
/// Environment overrides and validation apply in both cases.
pub fn load_optional_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => load_config(path),
        None => finish(FileConfig::default()),
    }
}

fn finish(mut config: FileConfig) -> Result<FileConfig> {
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;

    config.validate().map_err(|e| {
        AnonymizerError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Applies overrides using the ANONYMIZER_<SECTION>_<KEY> naming scheme
fn apply_overrides(
    config: &mut FileConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(val) = lookup("ANONYMIZER_CSV_DELIMITER") {
        config.csv.delimiter = val;
    }

    if let Some(val) = lookup("ANONYMIZER_OUTPUT_SUFFIX") {
        config.output.suffix = val;
    }
    if let Some(val) = lookup("ANONYMIZER_OUTPUT_FAIL_ON_WRITE_ERROR") {
        config.output.fail_on_write_error =
            parse_bool("ANONYMIZER_OUTPUT_FAIL_ON_WRITE_ERROR", &val)?;
    }

    if let Some(val) = lookup("ANONYMIZER_LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Some(val) = lookup("ANONYMIZER_LOGGING_FORMAT") {
        config.logging.format = val;
    }
    if let Some(val) = lookup("ANONYMIZER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("ANONYMIZER_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = lookup("ANONYMIZER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = lookup("ANONYMIZER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool(key: &str, val: &str) -> Result<bool> {
    val.parse()
        .map_err(|_| AnonymizerError::Configuration(format!("Invalid {key} value: {val}")))
}
