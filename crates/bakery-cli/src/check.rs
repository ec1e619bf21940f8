//! # Check Subcommand
//!
//! Decodes each document and reports whether it converts cleanly under the
//! configured policy. Undeclared keys that were retained are listed so they
//! can be reviewed.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bakery_core::Recipe;

use crate::config::CliConfig;
use crate::document::load_recipes;

/// Arguments for the `bakery check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Recipe documents to check.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every document converts, 1 otherwise.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let mut failed = 0usize;

    for path in &args.paths {
        match load_recipes(path, &config.policy) {
            Ok(recipes) => {
                println!("OK: {} ({} recipe(s))", path.display(), recipes.len());
                for line in undeclared_report(&recipes) {
                    println!("  WARN: {line}");
                }
            }
            Err(e) => {
                failed += 1;
                println!("  FAIL: {} — {e:#}", path.display());
            }
        }
    }

    tracing::info!(total = args.paths.len(), failed, "check finished");

    if failed > 0 {
        println!(
            "\n{} document(s) failed out of {} total.",
            failed,
            args.paths.len()
        );
        Ok(1)
    } else {
        Ok(0)
    }
}

/// One line per retained undeclared key, naming the entry by index and id.
pub fn undeclared_report(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .enumerate()
        .flat_map(|(i, recipe)| {
            recipe.undeclared_fields().map(move |key| {
                format!("entry {i} ({}) carries undeclared field `{key}`", recipe.id)
            })
        })
        .collect()
}
