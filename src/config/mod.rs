//! Configuration management.
//!
//! The anonymizer runs without any configuration file. An optional TOML file
//! (passed with `--config` or `ANONYMIZER_CONFIG`) supplies defaults for the
//! delimiter, the output file name suffix, the write-failure exit policy and
//! logging. Command-line flags always take precedence.
//!
//! # Example Configuration
//!
//! ```toml
//! [csv]
//! delimiter = ","
//!
//! [output]
//! suffix = "_anonymized"
//! fail_on_write_error = true
//!
//! [logging]
//! level = "info"
//! format = "json"
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! Every key can be overridden with `ANONYMIZER_<SECTION>_<KEY>`:
//!
//! ```bash
//! export ANONYMIZER_CSV_DELIMITER=","
//! export ANONYMIZER_LOGGING_LEVEL="debug"
//! export ANONYMIZER_LOGGING_LOCAL_ROTATION="hourly"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_optional_config};
pub use schema::{CsvConfig, FileConfig, LoggingConfig, OutputConfig};
