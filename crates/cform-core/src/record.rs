//! # Field Records
//!
//! A [`FieldRecord`] is the state of one form field: its current value and
//! the validation metadata the renderer needs to decide whether to show an
//! error. A record with errors that are not being shown is valid; that is
//! exactly the state of a field right after its errors were suppressed.

use serde::{Deserialize, Serialize};

/// Value and validation metadata for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    /// Current field value.
    pub value: String,
    /// Validation messages in display order.
    pub errors: Vec<String>,
    /// Whether `errors` should currently be rendered.
    pub is_showing_errors: bool,
    /// Validation has been requested but not started.
    pub is_pending_validation: bool,
    /// Validation is in flight.
    pub is_validating: bool,
}

impl FieldRecord {
    /// A record as supplied by the owner: errors are surfaced immediately.
    pub fn from_owner(value: impl Into<String>, error: Option<&str>) -> Self {
        let errors = match error {
            Some(message) if !message.is_empty() => vec![message.to_string()],
            _ => Vec::new(),
        };
        Self {
            value: value.into(),
            errors,
            is_showing_errors: true,
            is_pending_validation: false,
            is_validating: false,
        }
    }

    /// A record freshly edited by the user: errors are cleared until the
    /// next validation pass.
    pub fn edited(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            errors: Vec::new(),
            is_showing_errors: true,
            is_pending_validation: false,
            is_validating: false,
        }
    }

    /// Apply a set of overrides on top of this record.
    pub fn with_overrides(mut self, overrides: &FieldOverrides) -> Self {
        if let Some(value) = &overrides.value {
            self.value.clone_from(value);
        }
        if let Some(errors) = &overrides.errors {
            self.errors.clone_from(errors);
        }
        if let Some(flag) = overrides.is_showing_errors {
            self.is_showing_errors = flag;
        }
        if let Some(flag) = overrides.is_pending_validation {
            self.is_pending_validation = flag;
        }
        if let Some(flag) = overrides.is_validating {
            self.is_validating = flag;
        }
        self
    }

    /// Whether the renderer should mark this field as invalid.
    pub fn is_invalid(&self) -> bool {
        self.is_showing_errors && !self.errors.is_empty()
    }
}

/// Partial [`FieldRecord`]: every `Some` attribute replaces the record's own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldOverrides {
    pub value: Option<String>,
    pub errors: Option<Vec<String>>,
    pub is_showing_errors: Option<bool>,
    pub is_pending_validation: Option<bool>,
    pub is_validating: Option<bool>,
}

impl FieldOverrides {
    /// Overrides that hide the field's errors.
    pub fn hide_errors() -> Self {
        Self {
            is_showing_errors: Some(false),
            ..Self::default()
        }
    }
}
