//! Per-column anonymization reports

use crate::anonymization::config::AnonymizationStrategy;

/// Outcome of anonymizing one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    /// Column name
    pub column: String,

    /// Strategy applied
    pub strategy: AnonymizationStrategy,

    /// Number of cells rewritten
    pub cells: usize,

    /// Number of distinct original values, for strategies that track them
    pub distinct_values: Option<usize>,
}

impl ColumnReport {
    /// Human-readable confirmation for this column
    pub fn confirmation(&self) -> String {
        match self.strategy {
            AnonymizationStrategy::Pseudonymize => {
                format!("Anonymized column '{}' with unique ids.", self.column)
            }
            AnonymizationStrategy::Redact => {
                format!("Removed all values from column '{}'.", self.column)
            }
        }
    }
}
