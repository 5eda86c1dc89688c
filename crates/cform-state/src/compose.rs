//! # Output Composition
//!
//! Flattens the field state store into the value map reported to the
//! owner. This is the only output that crosses back over the form's
//! boundary, and it differs from the raw store in three ways:
//!
//! - **Legacy state suppression.** Contact records created under older
//!   validation rules may carry a state for countries that no longer take
//!   one. If the target country has no states and belongs to the EU or UK
//!   address-format group, `state` is emitted empty.
//! - **Fax.** `fax` is always emitted as `""`.
//! - **Phone.** A non-empty phone value is converted to ICANN format with
//!   the dialing country's metadata; without metadata the raw value is
//!   kept.
//!
//! Composition never fails.

use cform_core::{ContactDetails, ContactField, CountryCode, FieldStateStore};
use cform_region::{to_icann_format, RegionProvider};

/// Whether the target country has states, guarding against a stale flag.
///
/// The caller's `has_country_states` was computed for
/// `postal_country_code`. It is trusted only while the store's own country
/// value still equals that code. Otherwise the answer is recomputed from
/// the provider, keyed by the store's current state value: it is `true` only
/// when that value is a subdivision code of the target country. With no
/// target country the answer is `false`.
pub fn validated_has_country_states<P: RegionProvider + ?Sized>(
    store: &FieldStateStore,
    postal_country_code: Option<&CountryCode>,
    has_country_states: bool,
    provider: &P,
) -> bool {
    let store_country = store.value(ContactField::CountryCode.key());
    match postal_country_code {
        Some(target) if store_country == target.as_str() => has_country_states,
        Some(target) => {
            let state = store.value(ContactField::State.key());
            let recomputed = provider
                .country_states(target)
                .is_some_and(|states| states.iter().any(|s| s.code == state));
            tracing::debug!(
                store_country,
                target = %target,
                state,
                recomputed,
                "store country differs from confirmed country, recomputed states flag"
            );
            recomputed
        }
        None => false,
    }
}

/// Compose the owner-facing value map.
pub fn compose<P: RegionProvider + ?Sized>(
    store: &FieldStateStore,
    postal_country_code: Option<&CountryCode>,
    phone_country_code: &CountryCode,
    has_country_states: bool,
    provider: &P,
) -> ContactDetails {
    let mut values: ContactDetails = store
        .iter()
        .map(|(key, record)| (key.to_string(), record.value.clone()))
        .collect();

    let validated =
        validated_has_country_states(store, postal_country_code, has_country_states, provider);

    let mut state = store.value(ContactField::State.key()).to_string();
    if !validated {
        if let Some(target) = postal_country_code {
            let address_format = provider.address_format(target);
            if address_format.suppresses_legacy_state() && !state.is_empty() {
                tracing::debug!(country = %target, %address_format, "suppressing legacy state value");
                state.clear();
            }
        }
    }

    let phone = store.value(ContactField::Phone.key());
    let phone = if phone.is_empty() {
        String::new()
    } else {
        to_icann_format(phone, provider.dialing_info(phone_country_code))
    };

    values.insert(ContactField::Fax.key(), "");
    values.insert(ContactField::State.key(), state);
    values.insert(ContactField::Phone.key(), phone);
    values
}
