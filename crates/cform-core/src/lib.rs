//! # cform-core: Foundational Types for the Contact Details Form
//!
//! This crate is the leaf of the contact form workspace. It defines the
//! data model every other crate shares: how field names are keyed, what a
//! single field's state looks like, and how the whole form's state is held
//! between user edits.
//!
//! ## Key Design Principles
//!
//! 1. **One canonical key per field.** External hyphenated names
//!    (`country-code`) and internal camel-cased keys (`countryCode`) meet
//!    in exactly one place: [`normalize_field_key`]. Every store lookup goes
//!    through it, so the two spellings can never address different records.
//!
//! 2. **Copy-on-write store.** [`FieldStateStore`] transitions take `&self`
//!    and return a new store. Owners can keep the previous snapshot and
//!    compare it with the next one.
//!
//! 3. **Unknown fields are data, not errors.** The [`ContactField`]
//!    catalogue describes the fields the form renders, but the store
//!    accepts any key a collaborator introduces.
//!
//! 4. **Validated country codes.** [`CountryCode`] is a newtype with a
//!    validating constructor. No bare strings for phone or postal country.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cform-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod country;
pub mod details;
pub mod error;
pub mod field;
pub mod record;
pub mod store;

// Re-export primary types for ergonomic imports.
pub use country::CountryCode;
pub use details::{ContactDetails, ContactDetailsErrors};
pub use error::ValidationError;
pub use field::{normalize_field_key, ContactField};
pub use record::{FieldOverrides, FieldRecord};
pub use store::FieldStateStore;
