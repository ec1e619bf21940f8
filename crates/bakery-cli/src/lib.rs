//! # bakery-cli — Recipe Document Tooling
//!
//! Command-line access to the `bakery-core` conversion for recipe
//! documents stored as JSON or YAML.
//!
//! ## Subcommands
//!
//! - `check` — Decode documents and report failures and undeclared keys
//! - `normalize` — Rewrite a document with defaults filled in
//! - `patch` — Apply a null-skipping partial update
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `bakery-core`; no model logic lives here.

pub mod check;
pub mod config;
pub mod document;
pub mod normalize;
pub mod patch;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<check::CheckArgs>();
        let _ = std::any::type_name::<normalize::NormalizeArgs>();
        let _ = std::any::type_name::<patch::PatchArgs>();
        let _ = std::any::type_name::<config::CliConfig>();
    }
}
