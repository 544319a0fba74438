//! Delimited file writer

use crate::domain::{AnonymizerError, Delimiter, Result, Table};
use std::path::Path;

/// Serialize `table` to `path`, replacing any existing file
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Any failure to create, write or flush the file is returned as
/// `AnonymizerError::Write` carrying the underlying cause. Nothing is printed
/// here; the caller decides how a failed write affects the exit status.
pub fn write_table(table: &Table, path: impl AsRef<Path>, delimiter: Delimiter) -> Result<usize> {
    let path = path.as_ref();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| AnonymizerError::write(path, e))?;

    writer
        .write_record(table.headers())
        .map_err(|e| AnonymizerError::write(path, e))?;

    let mut rows = 0;
    for row in table.rows() {
        writer
            .write_record(&row)
            .map_err(|e| AnonymizerError::write(path, e))?;
        rows += 1;
    }

    writer.flush().map_err(|e| AnonymizerError::write(path, e))?;

    tracing::debug!(path = %path.display(), rows, "Wrote output table");

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::csv::read_table;
    use tempfile::TempDir;

    fn sample() -> Table {
        Table::from_rows(
            vec!["id".to_string(), "city".to_string()],
            vec![
                vec!["1".to_string(), "Paris".to_string()],
                vec!["2".to_string(), "Lyon".to_string()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_write_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let rows = write_table(&sample(), &path, Delimiter::DEFAULT).unwrap();

        assert_eq!(rows, 2);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "id;city\n1;Paris\n2;Lyon\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents that are longer than the table\n").unwrap();

        write_table(&sample(), &path, Delimiter::DEFAULT).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "id;city\n1;Paris\n2;Lyon\n");
    }

    #[test]
    fn test_value_containing_delimiter_is_quoted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_rows(
            vec!["note".to_string()],
            vec![vec!["a;b".to_string()]],
        )
        .unwrap();

        write_table(&table, &path, Delimiter::DEFAULT).unwrap();

        let back = read_table(&path, Delimiter::DEFAULT).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_table(&sample(), &path, Delimiter::DEFAULT).unwrap_err();

        assert!(err.is_write_failure());
        assert!(!path.exists());
    }
}
