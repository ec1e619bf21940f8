//! # Error Types
//!
//! Errors raised while converting loosely-typed property bags into the
//! typed recipe model. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every field-level failure names the wire key that caused it.
//! - Conversion is all-or-nothing: an error means no partially populated
//!   entity escapes to the caller.

use thiserror::Error;

use crate::identity::RecipeId;

/// Top-level error type for the recipe model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The input was not a key/value mapping.
    #[error("expected a mapping of properties, found {found}")]
    NotAMapping {
        /// JSON type name of the rejected input.
        found: &'static str,
    },

    /// A declared field carried a value of the wrong type.
    #[error("field `{field}` must be {expected}: {source}")]
    FieldType {
        /// Wire key of the field.
        field: String,
        /// Human-readable description of the accepted shape.
        expected: &'static str,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// An undeclared field was present while the policy rejects them.
    #[error("unknown field `{field}` is not part of the {entity} model")]
    UnknownField {
        /// Entity being converted.
        entity: &'static str,
        /// The rejected key.
        field: String,
    },

    /// A patch targeted a different recipe than the one being updated.
    #[error("patch targets {found} but the recipe being updated is {expected}")]
    IdMismatch {
        /// Id of the recipe being patched.
        expected: RecipeId,
        /// Id carried by the patch.
        found: RecipeId,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Returns the JSON type name of a value, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_mapping_message_names_type() {
        let err = ModelError::NotAMapping {
            found: json_type_name(&serde_json::json!([1, 2])),
        };
        assert_eq!(err.to_string(), "expected a mapping of properties, found an array");
    }

    #[test]
    fn id_mismatch_message_includes_both_ids() {
        let err = ModelError::IdMismatch {
            expected: RecipeId(4),
            found: RecipeId(9),
        };
        let msg = err.to_string();
        assert!(msg.contains("recipe:9"));
        assert!(msg.contains("recipe:4"));
    }

    #[test]
    fn field_type_exposes_source() {
        let source = serde_json::from_value::<u64>(serde_json::json!("x")).unwrap_err();
        let err = ModelError::FieldType {
            field: "id".to_string(),
            expected: "a non-negative integer",
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("field `id` must be a non-negative integer"));
    }
}
