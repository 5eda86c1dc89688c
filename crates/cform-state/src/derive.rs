//! # State Derivation
//!
//! Builds the field state store from an owner snapshot. This is the
//! synchronization point that keeps local edits from drifting away from
//! data the owner has corrected, e.g. after a server-side validation round
//! trip. The store is rebuilt, never merged.
//!
//! Owner keys are normalized on the way in, so the store and every value
//! map composed from it use canonical keys. An owner that supplies
//! `postal-code` gets `postalCode` back.

use cform_core::{ContactDetails, ContactDetailsErrors, FieldRecord, FieldStateStore};

/// Build a store with one record per key of `details`.
///
/// Each record carries the supplied value, a single error if `errors` has
/// a non-empty message for the key, and `is_showing_errors = true`. Keys
/// that only appear in `errors` get no record.
pub fn derive_store(details: &ContactDetails, errors: &ContactDetailsErrors) -> FieldStateStore {
    let store: FieldStateStore = details
        .iter()
        .map(|(key, value)| {
            (
                key.to_string(),
                FieldRecord::from_owner(value, errors.message(key)),
            )
        })
        .collect();
    tracing::debug!(fields = store.len(), "derived field state from owner snapshot");
    store
}
