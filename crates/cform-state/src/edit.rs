//! # Edit Projection
//!
//! Applies user edits to the field state store. An edit replaces the
//! field's record: the new value is stored and the field's errors are
//! cleared until the next validation pass.
//!
//! ## Cascades
//!
//! Some edits imply others. A cascade is expressed as an ordered list of
//! primitive [`Edit`]s produced by [`cascade_for`] and folded through the
//! same [`apply_edit`] used for every other edit:
//!
//! ```text
//! country-code = "GB"   ──▶  [ countryCode = "GB",
//!                               state = "" (errors hidden) ]
//! ```
//!
//! A country change therefore never leaves the previous country's state
//! value visible, and the reset itself never shows an error.

use cform_core::{normalize_field_key, ContactField, FieldOverrides, FieldRecord, FieldStateStore};

/// A single-field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Field key, either spelling.
    pub key: String,
    /// New value.
    pub value: String,
    /// Attributes replacing the defaults of an edited record.
    pub overrides: Option<FieldOverrides>,
}

impl Edit {
    /// A plain user edit.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            overrides: None,
        }
    }

    /// An edit with overrides.
    pub fn with_overrides(mut self, overrides: FieldOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Replace the record under `key` with an edited record.
///
/// The record gets `value`, no errors, `is_showing_errors = true` and both
/// validation flags off; `overrides` are applied last. Unknown keys create a
/// new record.
pub fn apply_edit(
    store: &FieldStateStore,
    key: &str,
    value: &str,
    overrides: Option<&FieldOverrides>,
) -> FieldStateStore {
    let mut record = FieldRecord::edited(value);
    if let Some(overrides) = overrides {
        record = record.with_overrides(overrides);
    }
    store.with_record(key, record)
}

/// Apply `edits` in order.
pub fn apply_edits(store: &FieldStateStore, edits: &[Edit]) -> FieldStateStore {
    edits.iter().fold(store.clone(), |acc, edit| {
        apply_edit(&acc, &edit.key, &edit.value, edit.overrides.as_ref())
    })
}

/// The edits a user change of `key` to `value` expands into.
///
/// The first edit is always the change itself.
pub fn cascade_for(key: &str, value: &str) -> Vec<Edit> {
    let mut edits = vec![Edit::new(key, value)];
    if normalize_field_key(key) == ContactField::CountryCode.key() {
        edits.push(
            Edit::new(ContactField::State.key(), "").with_overrides(FieldOverrides::hide_errors()),
        );
    }
    edits
}

/// Apply a user change of `key` to `value`, including its cascade.
pub fn apply_field_change(store: &FieldStateStore, key: &str, value: &str) -> FieldStateStore {
    let edits = cascade_for(key, value);
    if edits.len() > 1 {
        tracing::debug!(field = key, cascaded = edits.len() - 1, "applying cascading edits");
    }
    apply_edits(store, &edits)
}
