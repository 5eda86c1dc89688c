//! # cform-region: Country and Region Metadata
//!
//! The form engine needs three facts about a country that it does not own:
//! whether it has sub-national states, how to dial it, and which regional
//! address convention it follows. This crate provides them behind the
//! [`RegionProvider`] trait so the engine stays free of hidden globals and
//! can be tested against fake tables.
//!
//! - **Provider** (`provider.rs`): the [`RegionProvider`] capability.
//! - **Table** (`table.rs`): [`RegionTable`], a provider loaded from YAML.
//!   An embedded default table ships with the crate.
//! - **Address formats** (`address_format.rs`): the EU and UK address-format
//!   groups.
//! - **Phone** (`phone.rs`): conversion of entered numbers to ICANN format.
//!
//! ## Crate Policy
//!
//! - Depends only on `cform-core` internally.
//! - Loading a table is the only fallible operation. Lookups return
//!   `Option` and never fail.

pub mod address_format;
pub mod error;
pub mod phone;
pub mod provider;
pub mod table;

pub use address_format::{AddressFormat, EU_ADDRESS_FORMAT_COUNTRY_CODES, UK_ADDRESS_FORMAT_COUNTRY_CODES};
pub use error::RegionError;
pub use phone::to_icann_format;
pub use provider::RegionProvider;
pub use table::{CountryEntry, DialingInfo, RegionTable, Subdivision};
