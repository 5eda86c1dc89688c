//! # cform-cli: Contact Form Engine Command-Line Interface
//!
//! Exercises the form engine outside a renderer: scenario files are replayed
//! through a [`cform_state::FormSession`] and every composed value map is
//! printed as one JSON line.
//!
//! ## Subcommands
//!
//! - `replay`: Run a scenario of owner updates and user edits
//! - `normalize`: Print canonical field keys
//! - `format-phone`: Convert a phone number to ICANN format
//!
//! Handlers write to a caller-supplied writer and delegate to the engine
//! crates; argument parsing stays in `main.rs`.

pub mod normalize;
pub mod phone;
pub mod replay;

use std::path::Path;

use anyhow::Context;
use cform_region::RegionTable;

/// Load the region table at `path`, or the built-in one.
pub fn load_regions(path: Option<&Path>) -> anyhow::Result<RegionTable> {
    match path {
        Some(path) => RegionTable::from_path(path)
            .with_context(|| format!("loading region table {}", path.display())),
        None => RegionTable::builtin().context("loading built-in region table"),
    }
}
