//! Pseudonymization strategy
//!
//! Replaces each distinct value of a column with a positive integer id. Ids
//! are handed out in first-occurrence order, so the same input always yields
//! the same output.

use super::ColumnAnonymizer;
use crate::anonymization::config::AnonymizationStrategy;
use std::collections::HashMap;

/// Distinct value to id mapping, built fresh for every column
#[derive(Debug, Default)]
pub struct ValueIdMap {
    ids: HashMap<String, usize>,
}

impl ValueIdMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `value`, assigning the next free one (starting at 1) if unseen
    pub fn assign(&mut self, value: String) -> usize {
        let next = self.ids.len() + 1;
        *self.ids.entry(value).or_insert(next)
    }

    /// Number of distinct values seen so far
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no value has been assigned an id yet
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Pseudonymization strategy - replaces values with stable integer ids
#[derive(Debug, Default)]
pub struct PseudonymStrategy {
    map: ValueIdMap,
}

impl PseudonymStrategy {
    /// Create a new pseudonymization strategy
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColumnAnonymizer for PseudonymStrategy {
    fn strategy(&self) -> AnonymizationStrategy {
        AnonymizationStrategy::Pseudonymize
    }

    fn anonymize_cells(&mut self, cells: &mut [String]) -> Option<usize> {
        // Never carry ids over from a previous column.
        self.map = ValueIdMap::new();
        for cell in cells.iter_mut() {
            let id = self.map.assign(std::mem::take(cell));
            *cell = id.to_string();
        }
        Some(self.map.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_order() {
        let mut strategy = PseudonymStrategy::new();
        let mut column = cells(&["Paris", "Paris", "Lyon"]);

        let distinct = strategy.anonymize_cells(&mut column);

        assert_eq!(distinct, Some(2));
        assert_eq!(column, cells(&["1", "1", "2"]));
    }

    #[test]
    fn test_equal_values_share_ids() {
        let mut strategy = PseudonymStrategy::new();
        let original = cells(&["b", "a", "c", "a", "b", "b"]);
        let mut column = original.clone();

        strategy.anonymize_cells(&mut column);

        for i in 0..original.len() {
            for j in 0..original.len() {
                assert_eq!(original[i] == original[j], column[i] == column[j]);
            }
        }
        assert_eq!(column, cells(&["1", "2", "3", "2", "1", "1"]));
    }

    #[test]
    fn test_empty_values_are_tokens() {
        let mut strategy = PseudonymStrategy::new();
        let mut column = cells(&["", "x", ""]);
        assert_eq!(strategy.anonymize_cells(&mut column), Some(2));
        assert_eq!(column, cells(&["1", "2", "1"]));
    }

    #[test]
    fn test_map_reset_between_columns() {
        let mut strategy = PseudonymStrategy::new();
        let mut first = cells(&["a", "b"]);
        let mut second = cells(&["b", "c"]);

        strategy.anonymize_cells(&mut first);
        let distinct = strategy.anonymize_cells(&mut second);

        assert_eq!(second, cells(&["1", "2"]));
        assert_eq!(distinct, Some(2));
    }

    #[test]
    fn test_empty_column() {
        let mut strategy = PseudonymStrategy::new();
        let mut column: Vec<String> = Vec::new();
        assert_eq!(strategy.anonymize_cells(&mut column), Some(0));
    }

    #[test]
    fn test_value_id_map_assign_is_stable() {
        let mut map = ValueIdMap::new();
        assert!(map.is_empty());
        assert_eq!(map.assign("x".to_string()), 1);
        assert_eq!(map.assign("y".to_string()), 2);
        assert_eq!(map.assign("x".to_string()), 1);
        assert_eq!(map.len(), 2);
    }
}
