//! # ICANN Phone Format
//!
//! Domain-registration contact schemas require phone numbers as
//! `+<dial code>.<national number>` (e.g. `+44.2079460018`). Users type
//! numbers in whatever shape they are used to, so the conversion accepts
//! local notation (with or without a trunk prefix) and international
//! notation starting with `+` or the `00` call prefix.
//!
//! Conversion never fails. When the dialing metadata is missing or the
//! number cannot be split into dial code and national part, the entered
//! text is returned unchanged so the form stays displayable and can be
//! resubmitted.

use crate::table::DialingInfo;

/// Dialing prefix written in place of `+` (`0044 ...`).
const INTERNATIONAL_CALL_PREFIX: &str = "00";

/// Convert an entered phone number to ICANN format.
///
/// ```
/// use cform_region::{to_icann_format, DialingInfo};
///
/// let gb = DialingInfo { dial_code: "44".into(), national_prefix: Some("0".into()) };
/// assert_eq!(to_icann_format("020 7946 0018", Some(&gb)), "+44.2079460018");
/// assert_eq!(to_icann_format("+44 20 7946 0018", Some(&gb)), "+44.2079460018");
/// assert_eq!(to_icann_format("020 7946 0018", None), "020 7946 0018");
/// ```
pub fn to_icann_format(number: &str, dialing: Option<&DialingInfo>) -> String {
    let Some(dialing) = dialing else {
        tracing::debug!("no dialing metadata, leaving phone number unformatted");
        return number.to_string();
    };

    let trimmed = number.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();

    let international = if trimmed.starts_with('+') {
        Some(digits.as_str())
    } else {
        digits.strip_prefix(INTERNATIONAL_CALL_PREFIX)
    };

    let national = if let Some(international) = international {
        match international.strip_prefix(dialing.dial_code.as_str()) {
            Some(rest) => rest,
            None => {
                tracing::debug!(
                    dial_code = %dialing.dial_code,
                    "international number does not match dial code, leaving unformatted"
                );
                return number.to_string();
            }
        }
    } else {
        match dialing.national_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => {
                digits.strip_prefix(prefix).unwrap_or(digits.as_str())
            }
            _ => digits.as_str(),
        }
    };

    if national.is_empty() {
        return number.to_string();
    }
    format!("+{}.{}", dialing.dial_code, national)
}
