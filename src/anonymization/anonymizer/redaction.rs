//! Redaction anonymization strategy

use super::ColumnAnonymizer;
use crate::anonymization::config::AnonymizationStrategy;

/// Token written into every redacted cell
pub const REDACTION_PLACEHOLDER: &str = "-";

/// Redaction strategy - replaces every value with [`REDACTION_PLACEHOLDER`]
pub struct RedactionStrategy;

impl RedactionStrategy {
    /// Create a new redaction strategy
    pub fn new() -> Self {
        Self
    }
}

impl ColumnAnonymizer for RedactionStrategy {
    fn strategy(&self) -> AnonymizationStrategy {
        AnonymizationStrategy::Redact
    }

    fn anonymize_cells(&mut self, cells: &mut [String]) -> Option<usize> {
        for cell in cells.iter_mut() {
            cell.clear();
            cell.push_str(REDACTION_PLACEHOLDER);
        }
        None
    }
}

impl Default for RedactionStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction() {
        let mut strategy = RedactionStrategy::new();
        let mut column = vec!["Paris".to_string(), "Paris".to_string(), "Lyon".to_string()];

        let distinct = strategy.anonymize_cells(&mut column);

        assert_eq!(distinct, None);
        assert!(column.iter().all(|c| c == REDACTION_PLACEHOLDER));
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn test_redaction_is_idempotent() {
        let mut strategy = RedactionStrategy::new();
        let mut column = vec!["a".to_string()];
        strategy.anonymize_cells(&mut column);
        strategy.anonymize_cells(&mut column);
        assert_eq!(column, vec!["-".to_string()]);
    }
}
