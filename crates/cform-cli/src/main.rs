//! # cform CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cform_cli::normalize::{run_normalize, NormalizeArgs};
use cform_cli::phone::{run_format_phone, FormatPhoneArgs};
use cform_cli::replay::{run_replay, ReplayArgs};

/// Contact details form engine CLI.
///
/// Replays form scenarios, normalizes field keys and formats phone
/// numbers the way the contact form does.
#[derive(Parser, Debug)]
#[command(name = "cform", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a scenario of owner updates and user edits.
    Replay(ReplayArgs),
    /// Print canonical field keys.
    Normalize(NormalizeArgs),
    /// Convert a phone number to ICANN format.
    FormatPhone(FormatPhoneArgs),
}

/// Log filter for a `-v` count. Without `-v`, `RUST_LOG` applies and
/// defaults to warnings.
fn log_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Replay(args) => run_replay(&args, &mut out),
        Commands::Normalize(args) => run_normalize(&args, &mut out),
        Commands::FormatPhone(args) => run_format_phone(&args, &mut out),
    }
}
