//! Domain models and types for the anonymizer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Tabular data** ([`Table`]) held column-wise in memory
//! - **Validated settings** ([`Delimiter`])
//! - **Error types** ([`AnonymizerError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, AnonymizerError>`]:
//!
//! ```rust
//! use csv_anonymizer::domain::{Delimiter, Result};
//!
//! fn example() -> Result<Delimiter> {
//!     let delimiter: Delimiter = ",".parse()?;
//!     Ok(delimiter)
//! }
//! # example().unwrap();
//! ```

pub mod delimiter;
pub mod errors;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use delimiter::Delimiter;
pub use errors::AnonymizerError;
pub use result::Result;
pub use table::Table;
