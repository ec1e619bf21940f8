//! # Conversion Policy
//!
//! Controls how conversion treats keys that do not belong to the target
//! entity. Loaded from the `policy` section of a YAML or JSON config file.

use serde::{Deserialize, Serialize};

/// Treatment of undeclared keys found in a property bag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownFields {
    /// Keep them in the entity's `extra` map.
    #[default]
    Retain,
    /// Fail the conversion.
    Reject,
    /// Discard them.
    Drop,
}

impl UnknownFields {
    /// Returns the kebab-case identifier matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Reject => "reject",
            Self::Drop => "drop",
        }
    }
}

impl std::fmt::Display for UnknownFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion settings shared by construction and patching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConversionPolicy {
    /// What to do with keys outside the declared field set.
    pub unknown_fields: UnknownFields,
}

impl ConversionPolicy {
    /// Keep undeclared keys (the default).
    pub const LENIENT: Self = Self {
        unknown_fields: UnknownFields::Retain,
    };

    /// Reject undeclared keys.
    pub const STRICT: Self = Self {
        unknown_fields: UnknownFields::Reject,
    };
}
