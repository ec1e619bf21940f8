//! # Ingredients
//!
//! One component entry of a recipe. Members are decoded permissively: a
//! missing member takes its default and unrecognized members are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;
use crate::identity::IngredientId;

/// A single ingredient entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    /// Amount in `unit`. Carried as data only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    pub unit: String,
}

impl Ingredient {
    /// Create an unsaved ingredient with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

const INGREDIENTS_SHAPE: &str = "an array of ingredient objects or a single ingredient object";

/// Decode the `ingredients` member of a recipe.
///
/// Accepts an array of objects, a single object (one entry), or `{}`,
/// which is the empty placeholder older clients send and decodes to no
/// entries.
pub(crate) fn decode_ingredients(field: &str, value: &Value) -> Result<Vec<Ingredient>, ModelError> {
    let decode = |v: &Value| {
        Ingredient::deserialize(v).map_err(|source| ModelError::FieldType {
            field: field.to_string(),
            expected: INGREDIENTS_SHAPE,
            source,
        })
    };

    match value {
        Value::Array(items) => items.iter().map(decode).collect(),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Object(_) => Ok(vec![decode(value)?]),
        other => Err(ModelError::FieldType {
            field: field.to_string(),
            expected: INGREDIENTS_SHAPE,
            source: <serde_json::Error as serde::de::Error>::custom(format!(
                "found {}",
                crate::error::json_type_name(other)
            )),
        }),
    }
}
