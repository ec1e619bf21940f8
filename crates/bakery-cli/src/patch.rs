//! # Patch Subcommand
//!
//! Applies a partial update to a stored recipe. Keys set to `null` in the
//! patch are left untouched; a patch addressed to another recipe id is
//! refused.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bakery_core::Recipe;

use crate::config::CliConfig;
use crate::document::{load_bag, read_document, write_json};

/// Arguments for the `bakery patch` subcommand.
#[derive(Args, Debug)]
pub struct PatchArgs {
    /// The recipe to update.
    #[arg(value_name = "BASE")]
    pub base: PathBuf,

    /// Mapping of fields to change.
    #[arg(value_name = "PATCH")]
    pub patch: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the patch subcommand.
pub fn run_patch(args: &PatchArgs, config: &CliConfig) -> Result<u8> {
    let base = read_document(&args.base)?;
    let mut recipe = Recipe::from_value_with(&base, &config.policy)
        .with_context(|| args.base.display().to_string())?;
    let patch = load_bag(&args.patch)?;

    let summary = recipe
        .apply_patch(&patch, &config.policy)
        .with_context(|| format!("failed to apply {}", args.patch.display()))?;

    tracing::info!(
        recipe = %recipe.id,
        applied = ?summary.applied,
        skipped = ?summary.skipped,
        "patched recipe"
    );

    write_json(&recipe, args.output.as_deref(), config.pretty)?;
    Ok(0)
}
