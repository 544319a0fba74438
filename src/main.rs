// CSV Anonymizer - column pseudonymization and redaction for delimited files
// Copyright (c) 2025 CSV Anonymizer Contributors
// Licensed under the MIT License

use clap::Parser;
use csv_anonymizer::cli::{execute, Cli};
use csv_anonymizer::config::load_optional_config;
use csv_anonymizer::domain::AnonymizerError;
use csv_anonymizer::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Exits with status 2 and a usage message when neither --column nor --remove is given
    let cli = Cli::parse();

    let config = match load_optional_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    };

    let log_level = cli.log_level.as_deref().unwrap_or(config.logging.level.as_str());
    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "CSV Anonymizer");

    let exit_code = match execute(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::info!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            AnonymizerError::INTERNAL_EXIT_CODE
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}
