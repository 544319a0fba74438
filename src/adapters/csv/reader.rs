//! Delimited file reader

use crate::domain::{AnonymizerError, Delimiter, Result, Table};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Load a delimited file into memory
///
/// The first record is the header. Every following record must have exactly
/// as many fields as the header.
///
/// # Errors
///
/// - `AnonymizerError::NotFound` if `path` does not exist
/// - `AnonymizerError::Parse` for an empty file, a duplicated column name, a
///   row with the wrong number of fields or non-UTF-8 content
/// - `AnonymizerError::Io` for any other read failure
pub fn read_table(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<Table> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnonymizerError::NotFound(path.to_path_buf()),
        _ => AnonymizerError::Io(format!("Failed to open {}: {e}", path.display())),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let header_width = headers.len();
    if header_width == 0 || (header_width == 1 && headers[0].is_empty()) {
        return Err(AnonymizerError::Parse(format!(
            "{} has no header row",
            path.display()
        )));
    }

    let mut table = Table::new(headers)?;

    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        if record.len() != header_width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(AnonymizerError::Parse(format!(
                "{} line {line}: expected {header_width} fields, found {}",
                path.display(),
                record.len()
            )));
        }
        table.push_row(record.iter().map(str::to_string).collect())?;
    }

    tracing::debug!(
        path = %path.display(),
        columns = table.headers().len(),
        rows = table.row_count(),
        "Read input table"
    );

    Ok(table)
}

fn csv_error(path: &Path, err: csv::Error) -> AnonymizerError {
    if err.is_io_error() {
        AnonymizerError::Io(format!("Failed to read {}: {err}", path.display()))
    } else {
        AnonymizerError::Parse(format!("{}: {err}", path.display()))
    }
}
