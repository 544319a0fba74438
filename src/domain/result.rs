//! Result type alias for the anonymizer

use super::errors::AnonymizerError;

/// Result type alias for anonymizer operations
///
/// # Examples
///
/// ```
/// use csv_anonymizer::domain::result::Result;
/// use csv_anonymizer::domain::errors::AnonymizerError;
///
/// fn failing_function() -> Result<()> {
///     Err(AnonymizerError::ColumnNotFound("city".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, AnonymizerError>;
