//! # bakery CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bakery_cli::check::{run_check, CheckArgs};
use bakery_cli::config::CliConfig;
use bakery_cli::normalize::{run_normalize, NormalizeArgs};
use bakery_cli::patch::{run_patch, PatchArgs};
use bakery_core::ConversionPolicy;

/// Bakery recipe tooling.
///
/// Checks, normalizes, and patches recipe documents using the same
/// conversion rules as the application.
#[derive(Parser, Debug)]
#[command(name = "bakery", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject undeclared fields regardless of the configured policy.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that recipe documents convert cleanly.
    Check(CheckArgs),

    /// Rewrite a recipe document with defaults filled in.
    Normalize(NormalizeArgs),

    /// Apply a partial update to a recipe.
    Patch(PatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Load configuration and dispatch. Every failure, config included, is an `Err`.
fn run(cli: &Cli) -> anyhow::Result<u8> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.strict {
        config.policy = ConversionPolicy::STRICT;
    }

    match &cli.command {
        Commands::Check(args) => run_check(args, &config),
        Commands::Normalize(args) => run_normalize(args, &config),
        Commands::Patch(args) => run_patch(args, &config),
    }
}

/// Log level selected by the `-v` count.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
