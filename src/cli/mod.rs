//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap. Parsed flags
//! are merged with the optional configuration file into a plain
//! [`RunConfig`], which is then handed to the pipeline.

pub mod execute;

use crate::config::FileConfig;
use crate::core::RunConfig;
use crate::domain::{Delimiter, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

pub use execute::execute;

/// Anonymize contract data.
#[derive(Parser, Debug)]
#[command(name = "csv-anonymizer")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("transform")
        .required(true)
        .multiple(true)
        .args(["column", "remove"])
))]
pub struct Cli {
    /// Path to the CSV file
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Column to anonymize
    #[arg(short, long, value_name = "NAME")]
    pub column: Option<String>,

    /// Remove all values from the column
    #[arg(short, long, value_name = "NAME")]
    pub remove: Option<String>,

    /// CSV delimiter [default: ;]
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<Delimiter>,

    /// Output file path for the anonymized data
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file
    #[arg(long, value_name = "PATH", env = "ANONYMIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ANONYMIZER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Merge the flags with file configuration into a run request
    ///
    /// Flags win over the configuration file.
    ///
    /// # Errors
    ///
    /// Returns `AnonymizerError::Configuration` for an invalid configured
    /// delimiter and `AnonymizerError::Usage` if no column was selected.
    pub fn run_config(&self, config: &FileConfig) -> Result<RunConfig> {
        let delimiter = match self.delimiter {
            Some(delimiter) => delimiter,
            None => config.csv.delimiter()?,
        };

        let run_config = RunConfig {
            input: self.file.clone(),
            anonymize_column: self.column.clone(),
            remove_column: self.remove.clone(),
            delimiter,
            output: self.output.clone(),
            output_suffix: config.output.suffix.clone(),
        };
        run_config.validate()?;

        Ok(run_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parse_column() {
        let cli = Cli::parse_from(["csv-anonymizer", "-f", "data.csv", "-c", "city"]);
        assert_eq!(cli.file, PathBuf::from("data.csv"));
        assert_eq!(cli.column.as_deref(), Some("city"));
        assert!(cli.remove.is_none());
        assert!(cli.delimiter.is_none());
    }

    #[test]
    fn test_cli_parse_long_flags() {
        let cli = Cli::parse_from([
            "csv-anonymizer",
            "--file",
            "data.csv",
            "--remove",
            "name",
            "--delimiter",
            ",",
            "--output",
            "out.csv",
        ]);
        assert_eq!(cli.remove.as_deref(), Some("name"));
        assert_eq!(cli.delimiter, Some(Delimiter::new(",").unwrap()));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_cli_requires_column_or_remove() {
        let err = Cli::try_parse_from(["csv-anonymizer", "-f", "data.csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_requires_file() {
        let err = Cli::try_parse_from(["csv-anonymizer", "-c", "city"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_rejects_multi_char_delimiter() {
        let err = Cli::try_parse_from(["csv-anonymizer", "-f", "a.csv", "-c", "x", "-d", ";;"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_run_config_uses_file_delimiter() {
        let cli = Cli::parse_from(["csv-anonymizer", "-f", "data.csv", "-c", "city"]);
        let mut config = FileConfig::default();
        config.csv.delimiter = "|".to_string();

        let run = cli.run_config(&config).unwrap();
        assert_eq!(run.delimiter.as_byte(), b'|');
        assert_eq!(run.output_path(), PathBuf::from("data_anonymized.csv"));
    }

    #[test]
    fn test_run_config_flag_wins() {
        let cli = Cli::parse_from(["csv-anonymizer", "-f", "data.csv", "-r", "x", "-d", ","]);
        let mut config = FileConfig::default();
        config.csv.delimiter = "|".to_string();
        config.output.suffix = "_masked".to_string();

        let run = cli.run_config(&config).unwrap();
        assert_eq!(run.delimiter.as_byte(), b',');
        assert_eq!(run.output_path(), PathBuf::from("data_masked.csv"));
    }
}
