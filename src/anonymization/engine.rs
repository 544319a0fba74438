//! Column anonymization engine
//!
//! This module applies a [`ColumnAnonymizer`] strategy to one named column of a
//! [`Table`], checking that the column exists first.
//!
//! # Examples
//!
//! ```
//! use csv_anonymizer::anonymization::engine::{anonymize, redact};
//! use csv_anonymizer::domain::Table;
//!
//! # fn example() -> csv_anonymizer::domain::Result<()> {
//! let mut table = Table::from_rows(
//!     vec!["id".into(), "city".into(), "name".into()],
//!     vec![
//!         vec!["1".into(), "Paris".into(), "Ann".into()],
//!         vec!["2".into(), "Paris".into(), "Bob".into()],
//!     ],
//! )?;
//!
//! let report = anonymize(&mut table, "city")?;
//! assert_eq!(report.distinct_values, Some(1));
//! assert_eq!(table.column("city").unwrap(), ["1", "1"]);
//!
//! redact(&mut table, "name")?;
//! assert_eq!(table.column("name").unwrap(), ["-", "-"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::{
    anonymizer::{ColumnAnonymizer, PseudonymStrategy, RedactionStrategy},
    report::ColumnReport,
};
use crate::domain::{Result, Table};

/// Replace every cell of `column` with a stable integer id
///
/// # Errors
///
/// Returns `AnonymizerError::ColumnNotFound` if the header does not name `column`.
pub fn anonymize(table: &mut Table, column: &str) -> Result<ColumnReport> {
    apply(table, column, &mut PseudonymStrategy::new())
}

/// Replace every cell of `column` with the redaction placeholder
///
/// # Errors
///
/// Returns `AnonymizerError::ColumnNotFound` if the header does not name `column`.
pub fn redact(table: &mut Table, column: &str) -> Result<ColumnReport> {
    apply(table, column, &mut RedactionStrategy::new())
}

/// Apply an arbitrary strategy to one column
pub fn apply(
    table: &mut Table,
    column: &str,
    strategy: &mut dyn ColumnAnonymizer,
) -> Result<ColumnReport> {
    let cells = table.column_mut(column)?;
    let distinct_values = strategy.anonymize_cells(cells);

    let report = ColumnReport {
        column: column.to_string(),
        strategy: strategy.strategy(),
        cells: cells.len(),
        distinct_values,
    };

    tracing::info!(
        column = %report.column,
        strategy = %report.strategy,
        cells = report.cells,
        distinct_values = ?report.distinct_values,
        "{}",
        report.confirmation()
    );

    Ok(report)
}
