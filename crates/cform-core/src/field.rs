//! # Field Keys
//!
//! The form addresses fields by two spellings. Input widgets carry an
//! external hyphenated name (`country-code`, `postal-code`) while the owner's
//! contact details and the field state store use a camel-cased canonical
//! key (`countryCode`, `postalCode`). [`normalize_field_key`] is the single
//! conversion between the two.
//!
//! [`ContactField`] catalogues the fields the contact form renders. It is
//! informational: normalization and the store accept any key, so a
//! collaborator can introduce a new field without touching this crate.

use serde::{Deserialize, Serialize};

/// Convert an external field name into its canonical key.
///
/// The input is split into words on every non-alphanumeric character and
/// on case boundaries (`fooBar`, `URLValue`). The first word is lowercased
/// and each later word is capitalized, then the words are joined.
///
/// ```
/// use cform_core::normalize_field_key;
///
/// assert_eq!(normalize_field_key("country-code"), "countryCode");
/// assert_eq!(normalize_field_key("postal-code"), "postalCode");
/// assert_eq!(normalize_field_key("address-1"), "address1");
/// assert_eq!(normalize_field_key("countryCode"), "countryCode");
/// ```
pub fn normalize_field_key(external: &str) -> String {
    let mut key = String::with_capacity(external.len());
    for (index, word) in split_words(external).into_iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            key.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
    }
    key
}

/// Split a field name into words for camel-casing.
fn split_words(input: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (pos, &(offset, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&input[s..offset]);
            }
            continue;
        }

        let Some(s) = start else {
            start = Some(offset);
            continue;
        };

        let prev = chars[pos - 1].1;
        let next = chars.get(pos + 1).map(|&(_, n)| n);
        let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase();
        let acronym_end =
            prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);

        if lower_to_upper || acronym_end {
            words.push(&input[s..offset]);
            start = Some(offset);
        }
    }

    if let Some(s) = start {
        words.push(&input[s..]);
    }
    words
}

/// Every field of the contact details form.
///
/// `Fax` is kept for compatibility with the registration contact schema; the
/// form never populates it from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Organization,
    Email,
    AlternateEmail,
    Phone,
    Address1,
    Address2,
    City,
    State,
    PostalCode,
    CountryCode,
    Fax,
}

impl ContactField {
    /// All known fields in form order.
    pub fn all() -> &'static [ContactField] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::Organization,
            Self::Email,
            Self::AlternateEmail,
            Self::Phone,
            Self::Address1,
            Self::Address2,
            Self::City,
            Self::State,
            Self::PostalCode,
            Self::CountryCode,
            Self::Fax,
        ]
    }

    /// The canonical (camel-cased) key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Organization => "organization",
            Self::Email => "email",
            Self::AlternateEmail => "alternateEmail",
            Self::Phone => "phone",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postalCode",
            Self::CountryCode => "countryCode",
            Self::Fax => "fax",
        }
    }

    /// The external (hyphenated) name used by input widgets.
    pub fn form_name(&self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Organization => "organization",
            Self::Email => "email",
            Self::AlternateEmail => "alternate-email",
            Self::Phone => "phone",
            Self::Address1 => "address-1",
            Self::Address2 => "address-2",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postal-code",
            Self::CountryCode => "country-code",
            Self::Fax => "fax",
        }
    }

    /// Look up a known field by either spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = normalize_field_key(name);
        Self::all().iter().copied().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_hyphenated_names() {
        assert_eq!(normalize_field_key("country-code"), "countryCode");
        assert_eq!(normalize_field_key("postal-code"), "postalCode");
        assert_eq!(normalize_field_key("first-name"), "firstName");
        assert_eq!(normalize_field_key("alternate-email"), "alternateEmail");
    }

    #[test]
    fn digits_join_the_previous_word() {
        assert_eq!(normalize_field_key("address-1"), "address1");
        assert_eq!(normalize_field_key("address-2"), "address2");
    }

    #[test]
    fn canonical_keys_pass_through() {
        assert_eq!(normalize_field_key("countryCode"), "countryCode");
        assert_eq!(normalize_field_key("phone"), "phone");
    }

    #[test]
    fn other_separators_and_cases() {
        assert_eq!(normalize_field_key("Country_Code"), "countryCode");
        assert_eq!(normalize_field_key("country code"), "countryCode");
        assert_eq!(normalize_field_key("COUNTRY-CODE"), "countryCode");
        assert_eq!(normalize_field_key("URLValue"), "urlValue");
        assert_eq!(normalize_field_key("--vat--id--"), "vatId");
    }

    #[test]
    fn unknown_keys_are_not_rejected() {
        assert_eq!(normalize_field_key("tax-identifier"), "taxIdentifier");
    }

    #[test]
    fn empty_and_separator_only_inputs() {
        assert_eq!(normalize_field_key(""), "");
        assert_eq!(normalize_field_key("---"), "");
    }

    #[test]
    fn every_form_name_normalizes_to_its_key() {
        for field in ContactField::all() {
            assert_eq!(normalize_field_key(field.form_name()), field.key());
        }
    }

    #[test]
    fn field_catalogue_has_unique_keys() {
        let keys: std::collections::BTreeSet<&str> =
            ContactField::all().iter().map(ContactField::key).collect();
        assert_eq!(keys.len(), ContactField::all().len());
    }

    #[test]
    fn from_name_accepts_both_spellings() {
        assert_eq!(ContactField::from_name("country-code"), Some(ContactField::CountryCode));
        assert_eq!(ContactField::from_name("countryCode"), Some(ContactField::CountryCode));
        assert_eq!(ContactField::from_name("vat-id"), None);
    }

    #[test]
    fn field_serializes_as_canonical_key() {
        let json = serde_json::to_string(&ContactField::PostalCode).unwrap();
        assert_eq!(json, "\"postalCode\"");
        let json = serde_json::to_string(&ContactField::Address1).unwrap();
        assert_eq!(json, "\"address1\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing an already-normalized key changes nothing.
        #[test]
        fn normalization_is_idempotent(name in "[a-zA-Z0-9_ -]{0,24}") {
            let once = normalize_field_key(&name);
            let twice = normalize_field_key(&once);
            prop_assert_eq!(once, twice);
        }

        /// Canonical keys never contain separators.
        #[test]
        fn normalized_keys_are_alphanumeric(name in "[a-zA-Z0-9_ -]{0,24}") {
            let key = normalize_field_key(&name);
            prop_assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        }

        /// Hyphenated lowercase names become lower camel case.
        #[test]
        fn hyphen_to_camel(words in prop::collection::vec("[a-z]{1,8}", 1..4)) {
            let external = words.join("-");
            let mut expected = words[0].clone();
            for w in &words[1..] {
                expected.push_str(&w[..1].to_uppercase());
                expected.push_str(&w[1..]);
            }
            prop_assert_eq!(normalize_field_key(&external), expected);
        }
    }
}
