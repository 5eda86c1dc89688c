//! # Format-Phone Subcommand
//!
//! Converts one phone number to ICANN format with a country's dialing
//! metadata. Unknown countries print the number unchanged, as the form
//! does.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use cform_core::CountryCode;
use cform_region::{to_icann_format, RegionProvider};

/// Arguments for the format-phone subcommand.
#[derive(Args, Debug)]
pub struct FormatPhoneArgs {
    /// Phone number as entered.
    pub number: String,

    /// Dialing country code, e.g. `GB`.
    #[arg(long)]
    pub country: String,

    /// Region table to use instead of the built-in one.
    #[arg(long)]
    pub regions: Option<PathBuf>,
}

/// Run the format-phone subcommand.
pub fn run_format_phone(args: &FormatPhoneArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let country = CountryCode::new(args.country.as_str())
        .with_context(|| format!("invalid --country {:?}", args.country))?;
    let table = crate::load_regions(args.regions.as_deref())?;

    let dialing = table.dialing_info(&country);
    if dialing.is_none() {
        tracing::warn!(%country, "no dialing metadata, number left unformatted");
    }
    writeln!(out, "{}", to_icann_format(&args.number, dialing))?;
    Ok(())
}
