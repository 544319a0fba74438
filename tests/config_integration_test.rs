//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interference between tests.

use csv_anonymizer::config::{load_config, load_optional_config};
use csv_anonymizer::domain::AnonymizerError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("ANONYMIZER_CSV_DELIMITER");
    std::env::remove_var("ANONYMIZER_OUTPUT_SUFFIX");
    std::env::remove_var("ANONYMIZER_OUTPUT_FAIL_ON_WRITE_ERROR");
    std::env::remove_var("ANONYMIZER_LOGGING_LEVEL");
    std::env::remove_var("ANONYMIZER_LOGGING_FORMAT");
    std::env::remove_var("ANONYMIZER_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("ANONYMIZER_LOGGING_LOCAL_PATH");
    std::env::remove_var("ANONYMIZER_LOGGING_LOCAL_ROTATION");
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[csv]
delimiter = ","

[output]
suffix = "_masked"
fail_on_write_error = false

[logging]
level = "debug"
format = "json"
local_enabled = false
local_path = "/tmp/anonymizer-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.csv.delimiter, ",");
    assert_eq!(config.output.suffix, "_masked");
    assert!(!config.output.fail_on_write_error);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_overrides_file_values() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[csv]\ndelimiter = \",\"\n");
    std::env::set_var("ANONYMIZER_CSV_DELIMITER", "|");
    std::env::set_var("ANONYMIZER_LOGGING_LEVEL", "error");

    let result = load_config(file.path());
    cleanup_env_vars();

    let config = result.expect("Failed to load config");
    assert_eq!(config.csv.delimiter, "|");
    assert_eq!(config.logging.level, "error");
}

#[test]
fn test_optional_config_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_optional_config(None).expect("Defaults must be valid");

    assert_eq!(config.csv.delimiter, ";");
    assert_eq!(config.output.suffix, "_anonymized");
    assert!(config.output.fail_on_write_error);
}

#[test]
fn test_invalid_env_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("ANONYMIZER_CSV_DELIMITER", "::");
    let result = load_optional_config(None);
    cleanup_env_vars();

    let err = result.unwrap_err();
    assert!(matches!(err, AnonymizerError::Configuration(_)));
    assert!(err.to_string().contains("csv.delimiter"));
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[logging]\nformat = \"xml\"\n");
    let err = load_config(file.path()).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("logging.format"));
}

#[test]
fn test_unknown_types_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[output]\nfail_on_write_error = \"yes\"\n");
    let err = load_config(file.path()).unwrap_err();

    assert!(err.to_string().contains("TOML parse error"));
}

#[test]
fn test_env_rotation_override_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[logging]\nlocal_rotation = \"daily\"\n");

    std::env::set_var("ANONYMIZER_LOGGING_LOCAL_ROTATION", "weekly");
    let result = load_config(file.path());

    std::env::set_var("ANONYMIZER_LOGGING_LOCAL_ROTATION", "hourly");
    let overridden = load_config(file.path());

    std::env::set_var("ANONYMIZER_LOGGING_LOCAL_ENABLED", "maybe");
    let bad_bool = load_config(file.path());
    cleanup_env_vars();

    assert!(matches!(result, Err(AnonymizerError::Configuration(_))));
    assert_eq!(overridden.unwrap().logging.local_rotation, "hourly");
    assert!(matches!(bad_bool, Err(AnonymizerError::Configuration(_))));
}
