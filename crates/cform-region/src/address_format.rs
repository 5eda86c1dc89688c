//! # Address-Format Groups
//!
//! Countries that share a regional address convention are grouped so the
//! form can treat them alike. Two groups matter to the engine: the EU
//! format and the UK format. Neither uses a state/province line, and
//! contact records created under older validation rules may still carry a
//! state value for them.

use cform_core::CountryCode;
use serde::{Deserialize, Serialize};

/// Countries using the EU address format.
pub const EU_ADDRESS_FORMAT_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "BG", "CH", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU",
    "IS", "IT", "LI", "LT", "LU", "LV", "MC", "MT", "NL", "NO", "PL", "PT", "RO", "SE", "SI",
    "SK",
];

/// Countries using the UK address format.
pub const UK_ADDRESS_FORMAT_COUNTRY_CODES: &[&str] = &["GB", "IE"];

/// Regional address convention of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFormat {
    /// EU address format group.
    Eu,
    /// UK address format group.
    Uk,
    /// Everything else.
    Standard,
}

impl AddressFormat {
    /// Classify a country using the built-in groups.
    pub fn builtin_for(country: &CountryCode) -> Self {
        let code = country.as_str();
        if EU_ADDRESS_FORMAT_COUNTRY_CODES.contains(&code) {
            Self::Eu
        } else if UK_ADDRESS_FORMAT_COUNTRY_CODES.contains(&code) {
            Self::Uk
        } else {
            Self::Standard
        }
    }

    /// Whether a state value is dropped for this group when the country
    /// has no states.
    pub fn suppresses_legacy_state(&self) -> bool {
        matches!(self, Self::Eu | Self::Uk)
    }
}

impl std::fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Eu => "EU",
            Self::Uk => "UK",
            Self::Standard => "STANDARD",
        };
        f.write_str(s)
    }
}
