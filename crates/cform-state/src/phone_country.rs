//! # Phone Dialing Country
//!
//! The phone number is formatted with the dialing metadata of its own
//! country, which need not be the postal country. [`PhoneCountryTracker`]
//! holds that dialing country for the lifetime of a form and applies two
//! promotion rules:
//!
//! 1. **Country field edit.** While the phone field is empty, the user has
//!    not committed to a phone country, so a newly selected postal country
//!    becomes the dialing country. Once a number is entered, postal country
//!    changes leave it alone.
//!
//! 2. **Phone widget edit.** When the phone widget reports a dialing
//!    country, it is adopted only if the region provider has dialing
//!    metadata for it. Unknown codes are ignored without an error.

use cform_core::CountryCode;
use cform_region::RegionProvider;
use serde::{Deserialize, Serialize};

/// Dialing country used for phone formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCountryTracker {
    phone_country_code: CountryCode,
}

impl PhoneCountryTracker {
    /// Start tracking from an explicit dialing country.
    pub fn new(phone_country_code: CountryCode) -> Self {
        Self { phone_country_code }
    }

    /// Start from the owner's postal country, falling back to the user's
    /// locale country.
    pub fn initial(postal_country_code: Option<&CountryCode>, user_country_code: &CountryCode) -> Self {
        Self::new(postal_country_code.unwrap_or(user_country_code).clone())
    }

    /// The current dialing country.
    pub fn phone_country_code(&self) -> &CountryCode {
        &self.phone_country_code
    }

    /// Rule 1: the postal country field changed to `new_country_code`.
    ///
    /// Returns the promoted code, or `None` when the phone field already has
    /// a value or the new country is empty or malformed.
    pub fn on_country_field_edit(
        &mut self,
        current_phone_value: &str,
        new_country_code: &str,
    ) -> Option<CountryCode> {
        if !current_phone_value.is_empty() {
            tracing::debug!("phone number present, keeping dialing country");
            return None;
        }
        let code = CountryCode::from_form_value(new_country_code)?;
        tracing::debug!(country = %code, "promoting postal country to dialing country");
        self.phone_country_code = code.clone();
        Some(code)
    }

    /// Rule 2: the phone widget reported `entered_country_code`.
    ///
    /// Returns the adopted code, or `None` when the provider has no dialing
    /// metadata for it.
    pub fn on_phone_field_edit<P: RegionProvider + ?Sized>(
        &mut self,
        entered_country_code: &str,
        provider: &P,
    ) -> Option<CountryCode> {
        let code = CountryCode::from_form_value(entered_country_code)?;
        if provider.dialing_info(&code).is_none() {
            tracing::debug!(country = %code, "ignoring unknown dialing country");
            return None;
        }
        self.phone_country_code = code.clone();
        Some(code)
    }
}

impl Default for PhoneCountryTracker {
    fn default() -> Self {
        Self::new(CountryCode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cform_region::RegionTable;

    fn cc(code: &str) -> CountryCode {
        CountryCode::new(code).unwrap()
    }

    fn table() -> RegionTable {
        RegionTable::from_yaml_str(
            r#"
countries:
  - { code: US, name: United States, dial_code: "1", national_prefix: "1" }
  - { code: GB, name: United Kingdom, dial_code: "44", national_prefix: "0" }
"#,
        )
        .unwrap()
    }

    #[test]
    fn initial_prefers_postal_country() {
        let tracker = PhoneCountryTracker::initial(Some(&cc("DE")), &cc("US"));
        assert_eq!(tracker.phone_country_code(), &cc("DE"));
    }

    #[test]
    fn initial_falls_back_to_user_country() {
        let tracker = PhoneCountryTracker::initial(None, &cc("FR"));
        assert_eq!(tracker.phone_country_code(), &cc("FR"));
    }

    #[test]
    fn default_is_us() {
        assert_eq!(PhoneCountryTracker::default().phone_country_code(), &cc("US"));
    }

    #[test]
    fn empty_phone_promotes_country() {
        let mut tracker = PhoneCountryTracker::default();
        assert_eq!(tracker.on_country_field_edit("", "GB"), Some(cc("GB")));
        assert_eq!(tracker.phone_country_code(), &cc("GB"));
    }

    #[test]
    fn entered_phone_blocks_promotion() {
        let mut tracker = PhoneCountryTracker::default();
        assert_eq!(tracker.on_country_field_edit("555-0100", "GB"), None);
        assert_eq!(tracker.phone_country_code(), &cc("US"));
    }

    #[test]
    fn empty_country_selection_does_not_promote() {
        let mut tracker = PhoneCountryTracker::new(cc("GB"));
        assert_eq!(tracker.on_country_field_edit("", ""), None);
        assert_eq!(tracker.phone_country_code(), &cc("GB"));
    }

    #[test]
    fn phone_widget_known_country_is_adopted() {
        let mut tracker = PhoneCountryTracker::default();
        assert_eq!(tracker.on_phone_field_edit("GB", &table()), Some(cc("GB")));
        assert_eq!(tracker.phone_country_code(), &cc("GB"));
    }

    #[test]
    fn phone_widget_unknown_country_is_ignored() {
        let mut tracker = PhoneCountryTracker::new(cc("GB"));
        assert_eq!(tracker.on_phone_field_edit("ZZ", &table()), None);
        assert_eq!(tracker.on_phone_field_edit("", &table()), None);
        assert_eq!(tracker.on_phone_field_edit("gb", &table()), None);
        assert_eq!(tracker.phone_country_code(), &cc("GB"));
    }
}
