//! # Error Types
//!
//! The form engine itself never fails: unknown keys, unknown dialing
//! countries and stale metadata all degrade to a best-effort result. The
//! error types here cover the edges only, where raw strings are turned
//! into validated domain values.

use thiserror::Error;

/// Error raised by validating constructors of domain newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country code was empty or contained non-alphanumeric characters.
    #[error("invalid country code {0:?}: expected a non-empty ASCII alphanumeric code")]
    InvalidCountryCode(String),
}
