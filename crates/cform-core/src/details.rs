//! # Contact Detail Maps
//!
//! The owner exchanges plain maps with the form: [`ContactDetails`] holds
//! field values (both the inbound snapshot and the composed outbound
//! values), [`ContactDetailsErrors`] holds at most one validation message
//! per field. Keys are canonical field keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::ContactField;

/// Canonical field key to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactDetails(BTreeMap<String, String>);

impl ContactDetails {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every known contact field mapped to `""`.
    ///
    /// This is what the form starts from when the owner has no details yet.
    pub fn empty_form() -> Self {
        ContactField::all()
            .iter()
            .map(|f| (f.key().to_string(), String::new()))
            .collect()
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl FromIterator<(String, String)> for ContactDetails {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for ContactDetails {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Canonical field key to an optional validation message.
///
/// A `None` or empty message means "no message"; the form never invents a
/// placeholder for a field the owner considers invalid without saying why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactDetailsErrors(BTreeMap<String, Option<String>>);

impl ContactDetailsErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty message for `key`, if any.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Option::as_deref)
            .filter(|m| !m.is_empty())
    }

    /// Insert or replace a message.
    pub fn insert(&mut self, key: impl Into<String>, message: Option<String>) {
        self.0.insert(key.into(), message);
    }

    /// Builder-style insert of a message.
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(key, Some(message.into()));
        self
    }

    /// Whether no field carries a non-empty message.
    pub fn is_clear(&self) -> bool {
        self.0.keys().all(|k| self.message(k).is_none())
    }
}

impl FromIterator<(String, Option<String>)> for ContactDetailsErrors {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_every_known_field() {
        let details = ContactDetails::empty_form();
        assert_eq!(details.len(), ContactField::all().len());
        assert_eq!(details.get("countryCode"), Some(""));
        assert_eq!(details.get("fax"), Some(""));
    }

    #[test]
    fn builder_inserts() {
        let details = ContactDetails::new().with("city", "Leeds").with("city", "York");
        assert_eq!(details.get("city"), Some("York"));
        assert_eq!(details.len(), 1);
    }

    #[test]
    fn errors_message_filters_empty() {
        let mut errors = ContactDetailsErrors::new().with("email", "Invalid email");
        errors.insert("phone", Some(String::new()));
        errors.insert("city", None);
        assert_eq!(errors.message("email"), Some("Invalid email"));
        assert_eq!(errors.message("phone"), None);
        assert_eq!(errors.message("city"), None);
        assert_eq!(errors.message("state"), None);
    }

    #[test]
    fn errors_is_clear() {
        let mut errors = ContactDetailsErrors::new();
        errors.insert("phone", None);
        assert!(errors.is_clear());
        assert!(!errors.with("phone", "Required").is_clear());
    }

    #[test]
    fn errors_deserialize_with_nulls() {
        let errors: ContactDetailsErrors =
            serde_json::from_str(r#"{"email": "Invalid", "phone": null}"#).unwrap();
        assert_eq!(errors.message("email"), Some("Invalid"));
        assert_eq!(errors.message("phone"), None);
    }

    #[test]
    fn details_serialize_as_plain_object() {
        let details = ContactDetails::new().with("state", "").with("fax", "");
        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, r#"{"fax":"","state":""}"#);
    }
}
