//! # Normalize Subcommand
//!
//! Rewrites a recipe document with every declared field present and
//! defaults filled in. Arrays are ordered by position.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use bakery_core::{sort_by_position, Recipe};

use crate::config::CliConfig;
use crate::document::{decode_recipes, read_document, write_json};

/// Arguments for the `bakery normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Recipe document to normalize.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the normalize subcommand.
pub fn run_normalize(args: &NormalizeArgs, config: &CliConfig) -> Result<u8> {
    let document = read_document(&args.path)?;
    let output = args.output.as_deref();

    if let Value::Array(_) = document {
        let mut recipes = decode_recipes(&document, &args.path, &config.policy)?;
        sort_by_position(&mut recipes);
        write_json(&recipes, output, config.pretty)?;
        tracing::info!(count = recipes.len(), "normalized recipe list");
    } else {
        let recipe = Recipe::from_value_with(&document, &config.policy)
            .with_context(|| args.path.display().to_string())?;
        write_json(&recipe, output, config.pretty)?;
        tracing::info!(recipe = %recipe.id, "normalized recipe");
    }

    Ok(0)
}
