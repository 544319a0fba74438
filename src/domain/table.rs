//! In-memory tabular data
//!
//! A [`Table`] stores its cells column-wise so that the anonymization
//! strategies can rewrite a whole column through a single mutable slice.

use super::errors::AnonymizerError;
use super::result::Result;
use std::collections::HashSet;

/// Ordered set of named text columns sharing one row count
///
/// # Examples
///
/// ```
/// use csv_anonymizer::domain::Table;
///
/// let table = Table::from_rows(
///     vec!["id".to_string(), "city".to_string()],
///     vec![
///         vec!["1".to_string(), "Paris".to_string()],
///         vec!["2".to_string(), "Lyon".to_string()],
///     ],
/// ).unwrap();
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column("city").unwrap(), ["Paris", "Lyon"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
    row_count: usize,
}

impl Table {
    /// Creates an empty table with the given header
    ///
    /// # Errors
    ///
    /// Returns `AnonymizerError::Parse` if the header is empty or contains a
    /// duplicated column name.
    pub fn new(headers: Vec<String>) -> Result<Self> {
        if headers.is_empty() {
            return Err(AnonymizerError::Parse("header row is empty".to_string()));
        }

        let mut seen = HashSet::with_capacity(headers.len());
        for name in &headers {
            if !seen.insert(name.as_str()) {
                return Err(AnonymizerError::Parse(format!(
                    "duplicate column name '{name}' in header"
                )));
            }
        }

        let columns = vec![Vec::new(); headers.len()];
        Ok(Self {
            headers,
            columns,
            row_count: 0,
        })
    }

    /// Builds a table from a header and row-major data
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut table = Self::new(headers)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends one row
    ///
    /// # Errors
    ///
    /// Returns `AnonymizerError::Parse` if the row width differs from the header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(AnonymizerError::Parse(format!(
                "row {} has {} fields, header has {}",
                self.row_count + 1,
                row.len(),
                self.headers.len()
            )));
        }

        for (column, cell) in self.columns.iter_mut().zip(row) {
            column.push(cell);
        }
        self.row_count += 1;
        Ok(())
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns true if the header names `name`
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of the named column, top to bottom
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.column_index(name).map(|i| self.columns[i].as_slice())
    }

    /// Mutable cells of the named column
    ///
    /// # Errors
    ///
    /// Returns `AnonymizerError::ColumnNotFound` naming the missing column.
    pub fn column_mut(&mut self, name: &str) -> Result<&mut [String]> {
        match self.column_index(name) {
            Some(i) => Ok(self.columns[i].as_mut_slice()),
            None => Err(AnonymizerError::ColumnNotFound(name.to_string())),
        }
    }

    /// Iterates rows in order, each as a vector of cell references
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count).map(move |r| self.columns.iter().map(|c| c[r].as_str()).collect())
    }
}
