//! # Region Provider
//!
//! [`RegionProvider`] is the read-only metadata capability the form engine
//! is given. Production code uses a [`RegionTable`](crate::RegionTable);
//! tests are free to implement it over a handful of hard-coded countries.

use cform_core::CountryCode;

use crate::address_format::AddressFormat;
use crate::table::{DialingInfo, Subdivision};

/// Read-only country/region metadata.
pub trait RegionProvider {
    /// Country codes offered by the country selector, in display order.
    fn country_codes(&self) -> Vec<CountryCode>;

    /// Sub-national states of `country`, if the provider knows the country.
    fn country_states(&self, country: &CountryCode) -> Option<&[Subdivision]>;

    /// Dialing metadata for `country`, if known.
    fn dialing_info(&self, country: &CountryCode) -> Option<&DialingInfo>;

    /// Whether `country` has at least one state.
    fn has_country_states(&self, country: &CountryCode) -> bool {
        self.country_states(country).is_some_and(|states| !states.is_empty())
    }

    /// Address-format group of `country`.
    fn address_format(&self, country: &CountryCode) -> AddressFormat {
        AddressFormat::builtin_for(country)
    }
}

impl<T: RegionProvider + ?Sized> RegionProvider for &T {
    fn country_codes(&self) -> Vec<CountryCode> {
        (**self).country_codes()
    }

    fn country_states(&self, country: &CountryCode) -> Option<&[Subdivision]> {
        (**self).country_states(country)
    }

    fn dialing_info(&self, country: &CountryCode) -> Option<&DialingInfo> {
        (**self).dialing_info(country)
    }

    fn has_country_states(&self, country: &CountryCode) -> bool {
        (**self).has_country_states(country)
    }

    fn address_format(&self, country: &CountryCode) -> AddressFormat {
        (**self).address_format(country)
    }
}

impl<T: RegionProvider + ?Sized> RegionProvider for std::sync::Arc<T> {
    fn country_codes(&self) -> Vec<CountryCode> {
        (**self).country_codes()
    }

    fn country_states(&self, country: &CountryCode) -> Option<&[Subdivision]> {
        (**self).country_states(country)
    }

    fn dialing_info(&self, country: &CountryCode) -> Option<&DialingInfo> {
        (**self).dialing_info(country)
    }

    fn has_country_states(&self, country: &CountryCode) -> bool {
        (**self).has_country_states(country)
    }

    fn address_format(&self, country: &CountryCode) -> AddressFormat {
        (**self).address_format(country)
    }
}
