//! # Form Session
//!
//! One [`FormSession`] backs one rendered contact form. It owns the field
//! state store and the phone dialing country, and it is driven by discrete
//! events delivered one at a time:
//!
//! - the owner supplies a new snapshot of contact details and errors;
//! - the user changes a field;
//! - the phone widget reports a new number and dialing country.
//!
//! Each user event is projected into a new store, composed, and reported
//! to the [`ContactDetailsListener`] before the next event can be accepted;
//! `&mut self` on every handler is what serializes them.
//!
//! ## Owner synchronization
//!
//! The store is rebuilt from scratch whenever the owner's details or errors
//! differ from the ones it last supplied. The phone dialing country is not
//! part of the store and survives rebuilds.

use cform_core::{
    normalize_field_key, ContactDetails, ContactDetailsErrors, ContactField, CountryCode,
    FieldStateStore,
};
use cform_region::RegionProvider;
use serde::{Deserialize, Serialize};

use crate::compose::compose;
use crate::derive::derive_store;
use crate::edit::apply_field_change;
use crate::phone_country::PhoneCountryTracker;
use crate::view::{field_view, FieldView, FormLayout};

// ─── Configuration ───────────────────────────────────────────────────

/// Per-form configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Country of the user's locale, the dialing country fallback.
    pub user_country_code: CountryCode,
    /// Which form variant is shown.
    pub layout: FormLayout,
}

// ─── Owner Snapshot ──────────────────────────────────────────────────

/// Everything the owner supplies in one update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerSnapshot {
    /// Canonical contact details.
    pub contact_details: ContactDetails,
    /// Validation messages for the details.
    pub contact_details_errors: ContactDetailsErrors,
    /// Country the owner has confirmed for the postal address.
    pub postal_country_code: Option<CountryCode>,
    /// Whether the confirmed country has states.
    pub has_country_states: bool,
}

impl OwnerSnapshot {
    /// Build a snapshot, deriving the postal country from the details'
    /// `countryCode` and the states flag from `provider`.
    pub fn from_provider<P: RegionProvider + ?Sized>(
        contact_details: ContactDetails,
        contact_details_errors: ContactDetailsErrors,
        provider: &P,
    ) -> Self {
        let postal_country_code = contact_details
            .get(ContactField::CountryCode.key())
            .and_then(CountryCode::from_form_value);
        let has_country_states = postal_country_code
            .as_ref()
            .is_some_and(|code| provider.has_country_states(code));
        Self {
            contact_details,
            contact_details_errors,
            postal_country_code,
            has_country_states,
        }
    }
}

// ─── Events ──────────────────────────────────────────────────────────

/// A discrete input to a [`FormSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// The owner re-supplied contact details and errors.
    OwnerUpdate {
        #[serde(default)]
        contact_details: ContactDetails,
        #[serde(default)]
        contact_details_errors: ContactDetailsErrors,
    },
    /// The user changed a field.
    FieldChange { name: String, value: String },
    /// The phone widget reported a number and dialing country.
    PhoneChange {
        value: String,
        #[serde(default)]
        country_code: String,
    },
}

// ─── Listener ────────────────────────────────────────────────────────

/// Receives the composed values after every accepted edit.
pub trait ContactDetailsListener {
    /// Called with the freshly composed values.
    fn contact_details_changed(&mut self, values: &ContactDetails);
}

impl<F> ContactDetailsListener for F
where
    F: FnMut(&ContactDetails),
{
    fn contact_details_changed(&mut self, values: &ContactDetails) {
        self(values)
    }
}

/// Listener that keeps every reported value map.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    history: Vec<ContactDetails>,
}

impl RecordingListener {
    /// All reported value maps, oldest first.
    pub fn history(&self) -> &[ContactDetails] {
        &self.history
    }

    /// The most recently reported value map.
    pub fn last(&self) -> Option<&ContactDetails> {
        self.history.last()
    }
}

impl ContactDetailsListener for RecordingListener {
    fn contact_details_changed(&mut self, values: &ContactDetails) {
        self.history.push(values.clone());
    }
}

// ─── Session ─────────────────────────────────────────────────────────

/// State of one contact form instance.
pub struct FormSession<P, L = RecordingListener> {
    config: FormConfig,
    provider: P,
    listener: L,
    owner: OwnerSnapshot,
    store: FieldStateStore,
    phone: PhoneCountryTracker,
}

impl<P, L> FormSession<P, L>
where
    P: RegionProvider,
    L: ContactDetailsListener,
{
    /// Open a form on the owner's first snapshot.
    ///
    /// The dialing country starts as the owner's postal country, or the
    /// configured user country when there is none.
    pub fn new(config: FormConfig, provider: P, snapshot: OwnerSnapshot, listener: L) -> Self {
        let phone = PhoneCountryTracker::initial(
            snapshot.postal_country_code.as_ref(),
            &config.user_country_code,
        );
        let store = derive_store(&snapshot.contact_details, &snapshot.contact_details_errors);
        Self {
            config,
            provider,
            listener,
            owner: snapshot,
            store,
            phone,
        }
    }

    /// Apply an owner snapshot.
    ///
    /// Returns `true` when the store was rebuilt, i.e. the details or errors
    /// differ from the previous snapshot. The postal country and states
    /// flag are refreshed either way.
    pub fn sync_from_owner(&mut self, snapshot: OwnerSnapshot) -> bool {
        let changed = snapshot.contact_details != self.owner.contact_details
            || snapshot.contact_details_errors != self.owner.contact_details_errors;
        if changed {
            self.store = derive_store(&snapshot.contact_details, &snapshot.contact_details_errors);
            tracing::debug!(fields = self.store.len(), "rebuilt field state from owner");
        }
        self.owner = snapshot;
        changed
    }

    /// Apply owner details and errors, deriving the rest from the provider.
    pub fn sync_contact_details(
        &mut self,
        contact_details: ContactDetails,
        contact_details_errors: ContactDetailsErrors,
    ) -> bool {
        let snapshot =
            OwnerSnapshot::from_provider(contact_details, contact_details_errors, &self.provider);
        self.sync_from_owner(snapshot)
    }

    /// The user changed field `name` to `value`.
    pub fn handle_field_change(&mut self, name: &str, value: &str) -> ContactDetails {
        if normalize_field_key(name) == ContactField::CountryCode.key() {
            self.phone
                .on_country_field_edit(self.store.value(ContactField::Phone.key()), value);
        }
        self.store = apply_field_change(&self.store, name, value);
        self.publish()
    }

    /// The phone widget reported `value` with dialing country `country_code`.
    pub fn handle_phone_change(&mut self, value: &str, country_code: &str) -> ContactDetails {
        self.phone.on_phone_field_edit(country_code, &self.provider);
        self.store = apply_field_change(&self.store, ContactField::Phone.key(), value);
        self.publish()
    }

    /// Route an event; edits return the composed values.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<ContactDetails> {
        match event {
            FormEvent::OwnerUpdate {
                contact_details,
                contact_details_errors,
            } => {
                self.sync_contact_details(contact_details, contact_details_errors);
                None
            }
            FormEvent::FieldChange { name, value } => Some(self.handle_field_change(&name, &value)),
            FormEvent::PhoneChange {
                value,
                country_code,
            } => Some(self.handle_phone_change(&value, &country_code)),
        }
    }

    /// Compose the current values without notifying the listener.
    pub fn compose(&self) -> ContactDetails {
        compose(
            &self.store,
            self.owner.postal_country_code.as_ref(),
            self.phone.phone_country_code(),
            self.owner.has_country_states,
            &self.provider,
        )
    }

    /// View of field `name`. The owner's message for the field, if any,
    /// replaces the store's errors.
    pub fn field_view(&self, name: &str, disabled: bool) -> FieldView {
        let custom = self
            .owner
            .contact_details_errors
            .message(&normalize_field_key(name));
        field_view(&self.store, name, custom, disabled)
    }

    /// Fields the renderer should show.
    pub fn visible_fields(&self) -> Vec<ContactField> {
        self.config
            .layout
            .visible_fields(&self.store, self.owner.has_country_states)
    }

    /// Countries offered by the country selector.
    pub fn countries_list(&self) -> Vec<CountryCode> {
        self.provider.country_codes()
    }

    /// Current field state.
    pub fn store(&self) -> &FieldStateStore {
        &self.store
    }

    /// Current dialing country.
    pub fn phone_country_code(&self) -> &CountryCode {
        self.phone.phone_country_code()
    }

    /// The last owner snapshot.
    pub fn owner(&self) -> &OwnerSnapshot {
        &self.owner
    }

    /// Session configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Close the session and hand back the listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    fn publish(&mut self) -> ContactDetails {
        let values = self.compose();
        self.listener.contact_details_changed(&values);
        values
    }
}
