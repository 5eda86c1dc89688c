//! # Replay Subcommand
//!
//! Runs a scenario file through a form session. A scenario holds the
//! owner's first snapshot, optional session configuration and a list of
//! events:
//!
//! ```yaml
//! user_country_code: US
//! contact_details:
//!   countryCode: ""
//!   state: ""
//! events:
//!   - type: field_change
//!     name: country-code
//!     value: GB
//! ```
//!
//! Each event that produces output prints one JSON line with the step
//! number, the dialing country and the composed contact details. Files
//! ending in `.json` are parsed as JSON, everything else as YAML.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use cform_core::{ContactDetails, ContactDetailsErrors, CountryCode};
use cform_state::{FormConfig, FormEvent, FormLayout, FormSession, OwnerSnapshot, RecordingListener};
use serde::{Deserialize, Serialize};

/// Arguments for the replay subcommand.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to the scenario file.
    pub scenario: PathBuf,

    /// Region table to use instead of the built-in one.
    #[arg(long)]
    pub regions: Option<PathBuf>,
}

/// A replayable form scenario.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Country of the user's locale.
    pub user_country_code: Option<CountryCode>,
    /// Form variant.
    pub layout: FormLayout,
    /// Owner details at form open.
    pub contact_details: ContactDetails,
    /// Owner errors at form open.
    pub contact_details_errors: ContactDetailsErrors,
    /// Events in delivery order.
    pub events: Vec<FormEvent>,
}

impl Scenario {
    /// Load a scenario from YAML or JSON.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let scenario = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing JSON scenario {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing YAML scenario {}", path.display()))?
        };
        Ok(scenario)
    }

    /// Session configuration for this scenario.
    pub fn config(&self) -> FormConfig {
        FormConfig {
            user_country_code: self.user_country_code.clone().unwrap_or_default(),
            layout: self.layout,
        }
    }
}

/// One printed replay line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep<'a> {
    /// 1-based index of the event in the scenario.
    pub step: usize,
    /// Dialing country after the event.
    pub phone_country_code: &'a CountryCode,
    /// Composed values reported to the owner.
    pub contact_details: &'a ContactDetails,
}

/// Run the replay subcommand.
pub fn run_replay(args: &ReplayArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let scenario = Scenario::from_path(&args.scenario)?;
    let table = crate::load_regions(args.regions.as_deref())?;
    let outputs = replay(scenario, table, out)?;
    tracing::info!(
        scenario = %args.scenario.display(),
        outputs,
        "replayed scenario"
    );
    Ok(())
}

/// Replay `scenario` against `table`, writing one line per output.
/// Returns the number of lines written.
pub fn replay(
    scenario: Scenario,
    table: cform_region::RegionTable,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let config = scenario.config();
    let snapshot = OwnerSnapshot::from_provider(
        scenario.contact_details,
        scenario.contact_details_errors,
        &table,
    );
    let mut session = FormSession::new(config, table, snapshot, RecordingListener::default());

    let mut written = 0;
    for (index, event) in scenario.events.into_iter().enumerate() {
        let Some(values) = session.dispatch(event) else {
            continue;
        };
        let step = ReplayStep {
            step: index + 1,
            phone_country_code: session.phone_country_code(),
            contact_details: &values,
        };
        writeln!(out, "{}", serde_json::to_string(&step)?)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_defaults() {
        let scenario: Scenario = serde_yaml::from_str("events: []").unwrap();
        assert_eq!(scenario.config(), FormConfig::default());
        assert!(scenario.contact_details.is_empty());
    }

    #[test]
    fn scenario_rejects_unknown_keys() {
        assert!(serde_yaml::from_str::<Scenario>("evnets: []").is_err());
    }

    #[test]
    fn replay_prints_each_output() {
        let scenario: Scenario = serde_yaml::from_str(
            r#"
user_country_code: GB
contact_details: { countryCode: "", phone: "" }
events:
  - { type: field_change, name: phone, value: "020 7946 0018" }
  - { type: owner_update, contact_details: { countryCode: GB } }
  - { type: field_change, name: city, value: Leeds }
"#,
        )
        .unwrap();
        let table = cform_region::RegionTable::builtin().unwrap();
        let mut out = Vec::new();
        assert_eq!(replay(scenario, table, &mut out).unwrap(), 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["step"], 1);
        assert_eq!(lines[0]["phoneCountryCode"], "GB");
        assert_eq!(lines[0]["contactDetails"]["phone"], "+44.2079460018");
        assert_eq!(lines[1]["step"], 3);
        assert_eq!(lines[1]["contactDetails"]["city"], "Leeds");
        assert_eq!(lines[1]["contactDetails"]["fax"], "");
    }
}
