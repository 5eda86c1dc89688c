//! # Region Table
//!
//! [`RegionTable`] is the YAML-backed [`RegionProvider`]. The document lists
//! countries in selector order, each with its dialing metadata and optional
//! states, and may override the built-in address-format groups:
//!
//! ```yaml
//! address_formats:        # optional, defaults to the built-in groups
//!   uk: [GB, IE]
//! countries:
//!   - code: US
//!     name: United States
//!     dial_code: "1"
//!     national_prefix: "1"
//!     states:
//!       - { code: CA, name: California }
//!   - code: GB
//!     name: United Kingdom
//!     dial_code: "44"
//!     national_prefix: "0"
//! ```
//!
//! ## Validation
//!
//! Loading rejects duplicate countries and dial codes that are empty or
//! contain non-digits. Everything else is taken as given.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use cform_core::CountryCode;
use serde::{Deserialize, Serialize};

use crate::address_format::{
    AddressFormat, EU_ADDRESS_FORMAT_COUNTRY_CODES, UK_ADDRESS_FORMAT_COUNTRY_CODES,
};
use crate::error::RegionError;
use crate::provider::RegionProvider;

/// The table embedded in the crate.
const BUILTIN_REGIONS_YAML: &str = include_str!("../data/regions.yaml");

/// A sub-national state, province or territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
    /// Subdivision code as submitted in the `state` field (e.g. `CA`).
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Dialing metadata of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialingInfo {
    /// International dialing code, digits only (e.g. `44`).
    pub dial_code: String,
    /// Trunk prefix dropped when dialing internationally (e.g. `0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_prefix: Option<String>,
}

/// One country of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Country code.
    pub code: CountryCode,
    /// Display name.
    pub name: String,
    /// Dialing metadata.
    #[serde(flatten)]
    pub dialing: DialingInfo,
    /// States, empty for countries without them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<Subdivision>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct AddressFormatGroups {
    eu: Vec<CountryCode>,
    uk: Vec<CountryCode>,
}

impl Default for AddressFormatGroups {
    fn default() -> Self {
        let parse = |codes: &[&str]| {
            codes
                .iter()
                .filter_map(|c| CountryCode::new(*c).ok())
                .collect::<Vec<_>>()
        };
        Self {
            eu: parse(EU_ADDRESS_FORMAT_COUNTRY_CODES),
            uk: parse(UK_ADDRESS_FORMAT_COUNTRY_CODES),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegionDocument {
    #[serde(default)]
    address_formats: AddressFormatGroups,
    countries: Vec<CountryEntry>,
}

/// Country metadata loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    order: Vec<CountryCode>,
    countries: BTreeMap<CountryCode, CountryEntry>,
    eu: BTreeSet<CountryCode>,
    uk: BTreeSet<CountryCode>,
}

impl RegionTable {
    /// Parse a region table from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Parse`] for malformed YAML,
    /// [`RegionError::DuplicateCountry`] and [`RegionError::InvalidDialCode`]
    /// for structurally invalid tables.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegionError> {
        let doc: RegionDocument = serde_yaml::from_str(yaml)?;

        let mut order = Vec::with_capacity(doc.countries.len());
        let mut countries = BTreeMap::new();
        for entry in doc.countries {
            let dial = &entry.dialing.dial_code;
            if dial.is_empty() || !dial.chars().all(|c| c.is_ascii_digit()) {
                return Err(RegionError::InvalidDialCode {
                    country: entry.code.to_string(),
                    dial_code: dial.clone(),
                });
            }
            if countries.contains_key(&entry.code) {
                return Err(RegionError::DuplicateCountry(entry.code.to_string()));
            }
            order.push(entry.code.clone());
            countries.insert(entry.code.clone(), entry);
        }

        tracing::debug!(
            countries = countries.len(),
            eu = doc.address_formats.eu.len(),
            uk = doc.address_formats.uk.len(),
            "loaded region table"
        );

        Ok(Self {
            order,
            countries,
            eu: doc.address_formats.eu.into_iter().collect(),
            uk: doc.address_formats.uk.into_iter().collect(),
        })
    }

    /// Read and parse a region table file.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Io`] if the file cannot be read, otherwise the
    /// errors of [`RegionTable::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegionError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| RegionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// The table embedded in this crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document is itself invalid.
    pub fn builtin() -> Result<Self, RegionError> {
        Self::from_yaml_str(BUILTIN_REGIONS_YAML)
    }

    /// The entry for `country`, if present.
    pub fn get(&self, country: &CountryCode) -> Option<&CountryEntry> {
        self.countries.get(country)
    }

    /// Entries in selector order.
    pub fn entries(&self) -> impl Iterator<Item = &CountryEntry> {
        self.order.iter().filter_map(|code| self.countries.get(code))
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the table lists no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl RegionProvider for RegionTable {
    fn country_codes(&self) -> Vec<CountryCode> {
        self.order.clone()
    }

    fn country_states(&self, country: &CountryCode) -> Option<&[Subdivision]> {
        self.countries.get(country).map(|entry| entry.states.as_slice())
    }

    fn dialing_info(&self, country: &CountryCode) -> Option<&DialingInfo> {
        self.countries.get(country).map(|entry| &entry.dialing)
    }

    fn address_format(&self, country: &CountryCode) -> AddressFormat {
        if self.eu.contains(country) {
            AddressFormat::Eu
        } else if self.uk.contains(country) {
            AddressFormat::Uk
        } else {
            AddressFormat::Standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cc(code: &str) -> CountryCode {
        CountryCode::new(code).unwrap()
    }

    const SMALL: &str = r#"
countries:
  - code: US
    name: United States
    dial_code: "1"
    national_prefix: "1"
    states:
      - { code: CA, name: California }
      - { code: NY, name: New York }
  - code: GB
    name: United Kingdom
    dial_code: "44"
    national_prefix: "0"
  - code: DE
    name: Germany
    dial_code: "49"
    national_prefix: "0"
"#;

    #[test]
    fn parses_countries_in_order() {
        let table = RegionTable::from_yaml_str(SMALL).unwrap();
        assert_eq!(table.len(), 3);
        let codes: Vec<String> = table.country_codes().iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, vec!["US", "GB", "DE"]);
    }

    #[test]
    fn states_lookup() {
        let table = RegionTable::from_yaml_str(SMALL).unwrap();
        assert!(table.has_country_states(&cc("US")));
        assert!(!table.has_country_states(&cc("GB")));
        assert!(!table.has_country_states(&cc("FR")));
        assert_eq!(table.country_states(&cc("US")).map(<[_]>::len), Some(2));
        assert_eq!(table.country_states(&cc("GB")).map(<[_]>::len), Some(0));
        assert!(table.country_states(&cc("FR")).is_none());
    }

    #[test]
    fn dialing_lookup() {
        let table = RegionTable::from_yaml_str(SMALL).unwrap();
        let gb = table.dialing_info(&cc("GB")).unwrap();
        assert_eq!(gb.dial_code, "44");
        assert_eq!(gb.national_prefix.as_deref(), Some("0"));
        assert!(table.dialing_info(&cc("ZZ")).is_none());
    }

    #[test]
    fn default_address_formats_apply() {
        let table = RegionTable::from_yaml_str(SMALL).unwrap();
        assert_eq!(table.address_format(&cc("DE")), AddressFormat::Eu);
        assert_eq!(table.address_format(&cc("GB")), AddressFormat::Uk);
        assert_eq!(table.address_format(&cc("US")), AddressFormat::Standard);
    }

    #[test]
    fn address_format_overrides() {
        let yaml = r#"
address_formats:
  uk: [GB]
countries:
  - { code: IE, name: Ireland, dial_code: "353", national_prefix: "0" }
"#;
        let table = RegionTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.address_format(&cc("IE")), AddressFormat::Standard);
        assert_eq!(table.address_format(&cc("GB")), AddressFormat::Uk);
        // EU group falls back to the built-in list.
        assert_eq!(table.address_format(&cc("FR")), AddressFormat::Eu);
    }

    #[test]
    fn rejects_duplicate_country() {
        let yaml = r#"
countries:
  - { code: GB, name: United Kingdom, dial_code: "44" }
  - { code: GB, name: Great Britain, dial_code: "44" }
"#;
        let err = RegionTable::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, RegionError::DuplicateCountry(ref c) if c == "GB"));
    }

    #[test]
    fn rejects_non_digit_dial_code() {
        let yaml = r#"
countries:
  - { code: GB, name: United Kingdom, dial_code: "+44" }
"#;
        let err = RegionTable::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, RegionError::InvalidDialCode { .. }));
    }

    #[test]
    fn rejects_invalid_country_code() {
        let yaml = r#"
countries:
  - { code: "", name: Nowhere, dial_code: "0" }
"#;
        assert!(matches!(
            RegionTable::from_yaml_str(yaml),
            Err(RegionError::Parse(_))
        ));
    }

    #[test]
    fn builtin_table_loads() {
        let table = RegionTable::builtin().unwrap();
        assert!(table.len() > 10);
        assert!(table.has_country_states(&cc("US")));
        assert!(table.has_country_states(&cc("CA")));
        assert!(!table.has_country_states(&cc("DE")));
        assert_eq!(table.dialing_info(&cc("GB")).unwrap().dial_code, "44");
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();
        let table = RegionTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegionTable::from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, RegionError::Io { .. }));
    }

    #[test]
    fn entries_follow_selector_order() {
        let table = RegionTable::from_yaml_str(SMALL).unwrap();
        let names: Vec<&str> = table.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["United States", "United Kingdom", "Germany"]);
    }
}
