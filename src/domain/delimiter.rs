//! Field delimiter newtype with validation

use super::errors::AnonymizerError;
use std::fmt;
use std::str::FromStr;

/// Single-byte field delimiter used for both reading and writing
///
/// Accepts any one ASCII character, or `\t` / `tab` for a tab.
///
/// # Examples
///
/// ```
/// use csv_anonymizer::domain::Delimiter;
/// use std::str::FromStr;
///
/// let delimiter = Delimiter::from_str(";").unwrap();
/// assert_eq!(delimiter.as_byte(), b';');
/// assert_eq!(Delimiter::from_str("tab").unwrap().as_byte(), b'\t');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(u8);

impl Delimiter {
    /// Delimiter used when none is configured
    pub const DEFAULT: Delimiter = Delimiter(b';');

    /// Creates a delimiter from its textual form
    pub fn new(value: &str) -> Result<Self, AnonymizerError> {
        parse_byte(value)
            .map(Self)
            .map_err(AnonymizerError::Configuration)
    }

    /// Returns the raw delimiter byte
    pub fn as_byte(&self) -> u8 {
        self.0
    }
}

/// Validates the textual form of a delimiter, returning the plain reason on failure
pub fn parse_byte(value: &str) -> Result<u8, String> {
    let byte = match value {
        "\\t" | "tab" | "\t" => b'\t',
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => c as u8,
                _ => {
                    return Err(format!(
                        "Invalid delimiter '{value}'. Must be a single ASCII character"
                    ))
                }
            }
        }
    };

    if matches!(byte, b'\n' | b'\r' | b'"') {
        return Err(format!(
            "Invalid delimiter {:?}. Line breaks and quotes cannot separate fields",
            byte as char
        ));
    }

    Ok(byte)
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => write!(f, "\\t"),
            b => write!(f, "{}", b as char),
        }
    }
}

impl FromStr for Delimiter {
    type Err = AnonymizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
