//! # Field State Store
//!
//! [`FieldStateStore`] maps canonical field keys to [`FieldRecord`]s. It is
//! a value type: every transition returns a new store and leaves the
//! receiver untouched, so the owning UI layer can hold on to the previous
//! snapshot and detect changes with `==`.
//!
//! Lookups accept either key spelling; they are normalized before use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::normalize_field_key;
use crate::record::FieldRecord;

/// Per-field state of the whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldStateStore {
    fields: BTreeMap<String, FieldRecord>,
}

impl FieldStateStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The record stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&FieldRecord> {
        self.fields.get(&normalize_field_key(key))
    }

    /// The value stored under `key`, or `""` when the field is absent.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).map_or("", |rec| rec.value.as_str())
    }

    /// Whether a record exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// A new store with `record` stored under the normalized `key`.
    pub fn with_record(&self, key: &str, record: FieldRecord) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(normalize_field_key(key), record);
        Self { fields }
    }

    /// Iterate over `(canonical key, record)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRecord)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the store holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldRecord)> for FieldStateStore {
    fn from_iter<I: IntoIterator<Item = (String, FieldRecord)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (normalize_field_key(&k), v))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldStateStore {
        FieldStateStore::new()
            .with_record("countryCode", FieldRecord::from_owner("DE", None))
            .with_record("state", FieldRecord::from_owner("Bavaria", Some("Not allowed")))
    }

    #[test]
    fn lookups_accept_both_spellings() {
        let store = sample();
        assert_eq!(store.value("country-code"), "DE");
        assert_eq!(store.value("countryCode"), "DE");
        assert!(store.contains("country-code"));
    }

    #[test]
    fn missing_field_value_is_empty() {
        let store = sample();
        assert_eq!(store.value("phone"), "");
        assert!(store.get("phone").is_none());
    }

    #[test]
    fn with_record_leaves_original_untouched() {
        let before = sample();
        let after = before.with_record("state", FieldRecord::edited(""));
        assert_eq!(before.value("state"), "Bavaria");
        assert_eq!(after.value("state"), "");
        assert_ne!(before, after);
    }

    #[test]
    fn with_record_stores_under_canonical_key() {
        let store = FieldStateStore::new().with_record("postal-code", FieldRecord::edited("10115"));
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["postalCode"]);
    }

    #[test]
    fn from_iter_normalizes_keys() {
        let store: FieldStateStore = vec![("first-name".to_string(), FieldRecord::edited("Ada"))]
            .into_iter()
            .collect();
        assert_eq!(store.value("firstName"), "Ada");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_serializes_as_map() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["countryCode"]["value"], "DE");
        assert_eq!(json["state"]["errors"][0], "Not allowed");
    }
}
