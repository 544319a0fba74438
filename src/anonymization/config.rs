//! Anonymization strategy selection

use std::fmt;

/// How a column is anonymized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnonymizationStrategy {
    /// Replace each distinct value with a stable integer id
    Pseudonymize,
    /// Replace every value with the redaction placeholder
    Redact,
}

impl AnonymizationStrategy {
    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            AnonymizationStrategy::Pseudonymize => "pseudonymize",
            AnonymizationStrategy::Redact => "redact",
        }
    }
}

impl fmt::Display for AnonymizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
