//! Output path derivation

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix inserted into the file name when no output path is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_anonymized";

/// Derive the output path from the input path
///
/// `suffix` is inserted between the file stem and its extension, so
/// `data.csv` becomes `data_anonymized.csv`. The directory is kept and the
/// result never equals the input path.
///
/// # Examples
///
/// ```
/// use csv_anonymizer::core::output::default_output_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     default_output_path(Path::new("exports/data.csv"), "_anonymized"),
///     PathBuf::from("exports/data_anonymized.csv")
/// );
/// ```
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().map(OsString::from).unwrap_or_default();

    let mut name = stem;
    name.push(suffix);
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    input.with_file_name(name)
}
