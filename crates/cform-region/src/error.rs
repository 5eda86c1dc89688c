//! # Region Table Errors

use thiserror::Error;

/// Errors raised while loading a [`RegionTable`](crate::RegionTable).
#[derive(Error, Debug)]
pub enum RegionError {
    /// The YAML document could not be parsed into a region table.
    #[error("failed to parse region table: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The table file could not be read.
    #[error("failed to read region table {path}: {source}")]
    Io {
        /// Path of the table file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The same country code appears twice.
    #[error("duplicate country {0} in region table")]
    DuplicateCountry(String),

    /// A dial code is empty or contains non-digits.
    #[error("invalid dial code {dial_code:?} for country {country}")]
    InvalidDialCode {
        /// Country the dial code belongs to.
        country: String,
        /// The rejected dial code.
        dial_code: String,
    },
}
