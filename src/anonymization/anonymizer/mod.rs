//! Anonymization strategy module
//!
//! Provides the column-level strategies applied by the engine.

pub mod pseudonymize;
pub mod redaction;

use crate::anonymization::config::AnonymizationStrategy;

pub use pseudonymize::{PseudonymStrategy, ValueIdMap};
pub use redaction::{RedactionStrategy, REDACTION_PLACEHOLDER};

/// Trait for column anonymization strategy implementations
pub trait ColumnAnonymizer {
    /// Which strategy this is
    fn strategy(&self) -> AnonymizationStrategy;

    /// Rewrite every cell of a column in place.
    ///
    /// Returns the number of distinct original values when the strategy
    /// has to track them anyway.
    fn anonymize_cells(&mut self, cells: &mut [String]) -> Option<usize>;
}
