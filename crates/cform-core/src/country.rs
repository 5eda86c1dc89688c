//! # Country Codes
//!
//! [`CountryCode`] identifies a country for postal addressing and for
//! phone dialing metadata. The form keeps the two roles apart (a user may
//! live in one country and give a phone number from another) but both use
//! this type.
//!
//! ## Validation
//!
//! A country code is trimmed and must be non-empty ASCII alphanumeric.
//! Case is preserved: lookups in region tables are exact, so `gb` and `GB`
//! are different codes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for CountryCode -----------------------------------

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A country code, typically ISO 3166-1 alpha-2 (`"US"`, `"GB"`, `"DE"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the trimmed string
    /// is empty or contains anything other than ASCII letters and digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidCountryCode(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse an optional country code from a form value.
    ///
    /// Empty and invalid values map to `None`; the form uses `""` for
    /// "no country selected".
    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::new(value).ok()
    }

    /// Access the country code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    /// The fallback user-locale country.
    fn default() -> Self {
        Self("US".to_string())
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
