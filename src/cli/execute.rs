//! Command execution
//!
//! Runs the pipeline for parsed arguments and turns the outcome into user
//! messages and a process exit code.
//!
//! User-facing messages go to stdout and stderr directly. The matching
//! tracing events are recorded at info level so they stay out of the default
//! console output.

use super::Cli;
use crate::anonymization::ColumnReport;
use crate::config::FileConfig;
use crate::core::transform;
use crate::domain::AnonymizerError;
use anyhow::Context;
use std::io::{self, Write};

/// Execute the anonymization run
///
/// Returns the process exit code: 0 on success, otherwise
/// [`AnonymizerError::exit_code`]. A failed write only yields a nonzero code
/// when `output.fail_on_write_error` is set. Column confirmations are printed
/// before the write is attempted.
pub fn execute(cli: &Cli, config: &FileConfig) -> anyhow::Result<i32> {
    let run_config = match cli.run_config(config) {
        Ok(run_config) => run_config,
        Err(e) => return report_failure(&e),
    };

    let pending = match transform(&run_config) {
        Ok(pending) => pending,
        Err(e) => return report_failure(&e),
    };
    print_lines(pending.columns().iter().map(ColumnReport::confirmation))?;

    match pending.write() {
        Ok(summary) => {
            print_lines(std::iter::once(summary.saved_message()))?;
            Ok(0)
        }
        Err(e) if e.is_write_failure() => {
            tracing::info!(
                error = %e,
                fail_on_write_error = config.output.fail_on_write_error,
                "Output could not be written"
            );
            eprintln!("Warning: {e}");
            if config.output.fail_on_write_error {
                Ok(e.exit_code())
            } else {
                Ok(0)
            }
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(error: &AnonymizerError) -> anyhow::Result<i32> {
    crate::log_failure!(error, "Anonymization run failed");
    eprintln!("Error: {error}");
    Ok(error.exit_code())
}

fn print_lines(lines: impl Iterator<Item = String>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{line}").context("Failed to write to stdout")?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
