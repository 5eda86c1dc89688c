//! # cform-state: Form-State Synchronization Engine
//!
//! Keeps the contact details form in step with its owner. The owner holds
//! the canonical contact details and their validation errors; the user
//! edits fields one at a time. This crate turns owner snapshots into field
//! state, projects edits onto it, and composes the values reported back.
//!
//! ```text
//! owner snapshot ──▶ derive ──▶ FieldStateStore ◀──▶ edit (per user edit)
//!                                     │
//!                 PhoneCountryTracker ┤
//!                                     ▼
//!                                  compose ──▶ owner listener
//! ```
//!
//! ## Components
//!
//! - **Derivation** (`derive.rs`): builds a fresh store from an owner
//!   snapshot. Owner errors are always surfaced.
//!
//! - **Edit projection** (`edit.rs`): single-field edits that clear the
//!   field's errors, and the country cascade that resets the state field
//!   with its errors hidden.
//!
//! - **Phone country** (`phone_country.rs`): the dialing country used for
//!   phone formatting, tracked apart from the postal country.
//!
//! - **Composition** (`compose.rs`): flattens the store into the owner's
//!   value map with legacy state suppression, the constant `fax` field and
//!   ICANN phone formatting.
//!
//! - **Views** (`view.rs`): per-field view models and visible-field layouts
//!   for the renderer.
//!
//! - **Session** (`session.rs`): owns the store and the phone country for
//!   one form instance and serializes events through `&mut self`.
//!
//! ## Design
//!
//! Every transition is a pure function over an immutable store snapshot.
//! Nothing here fails: data-quality problems degrade to a best-effort
//! result because the form must always stay editable.

pub mod compose;
pub mod derive;
pub mod edit;
pub mod phone_country;
pub mod session;
pub mod view;

pub use compose::{compose, validated_has_country_states};
pub use derive::derive_store;
pub use edit::{apply_edit, apply_edits, apply_field_change, cascade_for, Edit};
pub use phone_country::PhoneCountryTracker;
pub use session::{
    ContactDetailsListener, FormConfig, FormEvent, FormSession, OwnerSnapshot, RecordingListener,
};
pub use view::{field_view, FieldView, FormLayout};
