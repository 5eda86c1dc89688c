//! # Normalize Subcommand
//!
//! Prints the canonical key for each external field name, one per line.

use std::io::Write;

use clap::Args;

/// Arguments for the normalize subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Field names to normalize, e.g. `postal-code`.
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Run the normalize subcommand.
pub fn run_normalize(args: &NormalizeArgs, out: &mut impl Write) -> anyhow::Result<()> {
    for key in &args.keys {
        writeln!(out, "{}", cform_core::normalize_field_key(key))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_key_per_line() {
        let args = NormalizeArgs {
            keys: vec!["postal-code".into(), "address_1".into(), "countryCode".into()],
        };
        let mut out = Vec::new();
        run_normalize(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "postalCode\naddress1\ncountryCode\n");
    }
}
