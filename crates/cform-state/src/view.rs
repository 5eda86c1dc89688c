//! # Field Views and Layouts
//!
//! What the renderer needs per field, derived from the store: the value to
//! display, whether to mark the field invalid, the message to show and
//! whether the input is disabled. Widget choice, labels and styling stay
//! with the renderer.
//!
//! [`FormLayout`] decides which fields are visible. The full contact form
//! shows the address block only once a country is selected; the G Suite
//! variant asks for country and postal code only.

use cform_core::{normalize_field_key, ContactField, FieldStateStore};
use serde::{Deserialize, Serialize};

/// Render-ready state of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    /// External field name, as given.
    pub name: String,
    /// Value to display, `""` for absent fields.
    pub value: String,
    /// Whether the field is marked invalid.
    pub is_error: bool,
    /// Message under the field; empty when there is none.
    pub error_message: String,
    /// Whether input is disabled.
    pub disabled: bool,
}

/// Build the view of field `name`.
///
/// A non-empty `custom_error` takes precedence over the record's own
/// errors, which are otherwise joined with newlines.
pub fn field_view(
    store: &FieldStateStore,
    name: &str,
    custom_error: Option<&str>,
    disabled: bool,
) -> FieldView {
    let record = store.get(name);
    let error_message = match custom_error.filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => record.map(|r| r.errors.join("\n")).unwrap_or_default(),
    };
    FieldView {
        name: name.to_string(),
        value: record.map(|r| r.value.clone()).unwrap_or_default(),
        is_error: record.is_some_and(|r| r.is_invalid()),
        error_message,
        disabled,
    }
}

/// Which variant of the form is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLayout {
    /// Only collect what G Suite needs (name, country, postal code).
    pub needs_only_google_apps_details: bool,
    /// Ask for an alternate email address.
    pub needs_alternate_email: bool,
}

impl FormLayout {
    /// Visible fields in display order.
    pub fn visible_fields(&self, store: &FieldStateStore, has_country_states: bool) -> Vec<ContactField> {
        let mut fields = vec![ContactField::FirstName, ContactField::LastName];
        if self.needs_alternate_email {
            fields.push(ContactField::AlternateEmail);
        }

        if self.needs_only_google_apps_details {
            fields.extend([ContactField::CountryCode, ContactField::PostalCode]);
            return fields;
        }

        fields.extend([
            ContactField::Organization,
            ContactField::Email,
            ContactField::Phone,
            ContactField::CountryCode,
        ]);
        if !store.value(ContactField::CountryCode.key()).is_empty() {
            fields.extend([ContactField::Address1, ContactField::Address2, ContactField::City]);
            if has_country_states {
                fields.push(ContactField::State);
            }
            fields.push(ContactField::PostalCode);
        }
        fields
    }

    /// Whether the field `name` is visible.
    pub fn is_visible(&self, store: &FieldStateStore, has_country_states: bool, name: &str) -> bool {
        let key = normalize_field_key(name);
        self.visible_fields(store, has_country_states)
            .iter()
            .any(|f| f.key() == key)
    }
}
