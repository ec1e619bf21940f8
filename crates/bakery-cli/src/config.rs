//! # CLI Configuration
//!
//! Optional YAML (or JSON) file passed with `--config`:
//!
//! ```yaml
//! policy:
//!   unknown-fields: reject   # retain | reject | drop
//! pretty: true
//! ```
//!
//! Every key is optional; a missing file argument means all defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bakery_core::ConversionPolicy;

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CliConfig {
    /// Conversion policy applied to every document.
    pub policy: ConversionPolicy,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            policy: ConversionPolicy::default(),
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load the configuration file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            unknown_fields = %config.policy.unknown_fields,
            "loaded configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_core::UnknownFields;

    #[test]
    fn no_path_yields_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.pretty);
    }

    #[test]
    fn loads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bakery.yaml");
        std::fs::write(&path, "policy:\n  unknown-fields: drop\npretty: false\n").unwrap();
        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.policy.unknown_fields, UnknownFields::Drop);
        assert!(!config.pretty);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bakery.yaml");
        std::fs::write(&path, "pretty: false\n").unwrap();
        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.policy, ConversionPolicy::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn invalid_policy_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bakery.yaml");
        std::fs::write(&path, "policy:\n  unknown-fields: sometimes\n").unwrap();
        assert!(CliConfig::load(Some(&path)).is_err());
    }
}
