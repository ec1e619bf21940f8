//! # Document I/O
//!
//! Reading recipe documents from disk and writing results. The format is
//! chosen by extension: `.yaml`/`.yml` is YAML, anything else is JSON.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;

use bakery_core::{ConversionPolicy, PropertyBag, Recipe};

/// Read a document into a JSON value.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let value = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))?
    };
    Ok(value)
}

/// Decode a document holding one recipe or an array of recipes.
pub fn load_recipes(path: &Path, policy: &ConversionPolicy) -> Result<Vec<Recipe>> {
    decode_recipes(&read_document(path)?, path, policy)
}

/// Decode an already-read document. `path` is used for error context only.
pub fn decode_recipes(
    document: &Value,
    path: &Path,
    policy: &ConversionPolicy,
) -> Result<Vec<Recipe>> {
    match document {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Recipe::from_value_with(item, policy)
                    .with_context(|| format!("{}: entry {i}", path.display()))
            })
            .collect(),
        other => {
            let recipe = Recipe::from_value_with(other, policy)
                .with_context(|| path.display().to_string())?;
            Ok(vec![recipe])
        }
    }
}

/// Decode a document that must hold exactly one mapping.
pub fn load_bag(path: &Path) -> Result<PropertyBag> {
    let value = read_document(path)?;
    if !value.is_object() {
        bail!("{}: expected a single mapping", path.display());
    }
    PropertyBag::from_value(value).with_context(|| path.display().to_string())
}

/// Serialize `value` as JSON to `output`, or stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>, pretty: bool) -> Result<()> {
    let mut rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    rendered.push('\n');

    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
