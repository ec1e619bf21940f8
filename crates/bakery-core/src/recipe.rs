//! # Recipe Model
//!
//! The `Recipe` entity and its conversion from a [`PropertyBag`].
//!
//! ## Conversion
//!
//! Every own property of the input is visited once. Declared keys are
//! decoded by [`Recipe::set_field`], which names each field explicitly;
//! there is no reflective copy. Keys outside [`Recipe::FIELDS`] are handed
//! to the [`ConversionPolicy`]: kept in [`Recipe::extra`], rejected, or
//! dropped. A `null` for a declared key restores that field's default.
//!
//! Conversion and patching are all-or-nothing. A failure leaves no
//! partially populated recipe behind.
//!
//! ## Wire Shape
//!
//! Keys are camelCase (`imagePath`, `userId`). `userId` is omitted when
//! unset. Retained undeclared keys are flattened back into the mapping.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::bag::PropertyBag;
use crate::error::{json_type_name, ModelError};
use crate::identity::{RecipeId, UserId};
use crate::ingredient::{decode_ingredients, Ingredient};
use crate::policy::{ConversionPolicy, UnknownFields};

const ID_SHAPE: &str = "a non-negative integer";
const USER_SHAPE: &str = "a non-negative integer or an object with an `id` member";
const TEXT_SHAPE: &str = "a string";
const POSITION_SHAPE: &str = "an integer";

/// A bakery recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    /// Assigned by the persistence layer; `0` until then.
    pub id: RecipeId,
    /// Owning user.
    pub user_id: Option<UserId>,
    pub name: String,
    pub description: String,
    /// URL or storage path of the recipe image.
    pub image_path: String,
    pub ingredients: Vec<Ingredient>,
    /// Ordering hint among a user's recipes.
    pub position: i64,
    /// Undeclared keys kept under [`UnknownFields::Retain`]. Entries named
    /// like a declared field are never written out.
    pub extra: Map<String, Value>,
}

/// Outcome of [`Recipe::apply_patch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSummary {
    /// Keys written to the recipe, declared fields and retained extras alike.
    pub applied: Vec<String>,
    /// Keys left untouched: `null` values and dropped undeclared keys.
    pub skipped: Vec<String>,
}

/// What [`Recipe::assign`] did with a key.
enum Assigned {
    Field,
    Retained,
    Dropped,
}

impl Recipe {
    /// Wire keys of the declared fields.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "userId",
        "name",
        "description",
        "imagePath",
        "ingredients",
        "position",
    ];

    /// Build a recipe from a property bag using the default policy.
    pub fn from_data(data: &PropertyBag) -> Result<Self, ModelError> {
        Self::from_data_with(data, &ConversionPolicy::default())
    }

    /// Build a recipe from the own properties of `data`.
    ///
    /// Declared fields absent from `data` keep their defaults. Properties
    /// visible only through the bag's parent are ignored.
    ///
    /// # Errors
    ///
    /// - [`ModelError::FieldType`] if a declared key has the wrong type.
    /// - [`ModelError::UnknownField`] if `policy` rejects undeclared keys
    ///   and one is present.
    pub fn from_data_with(data: &PropertyBag, policy: &ConversionPolicy) -> Result<Self, ModelError> {
        Self::from_entries(data.own_entries(), policy)
    }

    /// Build a recipe from a raw JSON value using the default policy.
    ///
    /// `null` stands for a missing mapping and yields the default recipe.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        Self::from_value_with(value, &ConversionPolicy::default())
    }

    /// Build a recipe from a raw JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAMapping`] for anything but an object or
    /// `null`, plus the errors of [`Recipe::from_data_with`].
    pub fn from_value_with(value: &Value, policy: &ConversionPolicy) -> Result<Self, ModelError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::from_entries(map.iter(), policy),
            other => Err(ModelError::NotAMapping {
                found: json_type_name(other),
            }),
        }
    }

    fn from_entries<'a>(
        entries: impl Iterator<Item = (&'a String, &'a Value)>,
        policy: &ConversionPolicy,
    ) -> Result<Self, ModelError> {
        let mut recipe = Self::default();
        for (key, value) in entries {
            recipe.assign(key, value, policy)?;
        }
        Ok(recipe)
    }

    /// Decode `value` into the declared field named by `key`.
    ///
    /// Returns `Ok(false)` without touching the recipe when `key` is not a
    /// declared field. On error the field keeps its previous value.
    pub fn set_field(&mut self, key: &str, value: &Value) -> Result<bool, ModelError> {
        if value.is_null() {
            return Ok(self.reset_field(key));
        }
        match key {
            "id" => self.id = decode(key, ID_SHAPE, value)?,
            "userId" => self.user_id = Some(decode(key, USER_SHAPE, value)?),
            "name" => self.name = decode(key, TEXT_SHAPE, value)?,
            "description" => self.description = decode(key, TEXT_SHAPE, value)?,
            "imagePath" => self.image_path = decode(key, TEXT_SHAPE, value)?,
            "ingredients" => self.ingredients = decode_ingredients(key, value)?,
            "position" => self.position = decode(key, POSITION_SHAPE, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn reset_field(&mut self, key: &str) -> bool {
        match key {
            "id" => self.id = RecipeId::UNASSIGNED,
            "userId" => self.user_id = None,
            "name" => self.name.clear(),
            "description" => self.description.clear(),
            "imagePath" => self.image_path.clear(),
            "ingredients" => self.ingredients.clear(),
            "position" => self.position = 0,
            _ => return false,
        }
        true
    }

    fn assign(
        &mut self,
        key: &str,
        value: &Value,
        policy: &ConversionPolicy,
    ) -> Result<Assigned, ModelError> {
        if self.set_field(key, value)? {
            return Ok(Assigned::Field);
        }
        match policy.unknown_fields {
            UnknownFields::Retain => {
                tracing::debug!(field = key, "retaining undeclared recipe field");
                self.extra.insert(key.to_string(), value.clone());
                Ok(Assigned::Retained)
            }
            UnknownFields::Drop => {
                tracing::debug!(field = key, "dropping undeclared recipe field");
                Ok(Assigned::Dropped)
            }
            UnknownFields::Reject => Err(ModelError::UnknownField {
                entity: "recipe",
                field: key.to_string(),
            }),
        }
    }

    /// Merge the own properties of `patch` into this recipe.
    ///
    /// `null` values are skipped rather than resetting the field. A patch
    /// `id` must match this recipe's id once one is assigned.
    ///
    /// # Errors
    ///
    /// [`ModelError::IdMismatch`] plus the errors of
    /// [`Recipe::from_data_with`]. On error the recipe is unchanged.
    pub fn apply_patch(
        &mut self,
        patch: &PropertyBag,
        policy: &ConversionPolicy,
    ) -> Result<PatchSummary, ModelError> {
        let mut next = self.clone();
        let mut summary = PatchSummary::default();

        for (key, value) in patch.own_entries() {
            if value.is_null() {
                summary.skipped.push(key.clone());
                continue;
            }
            if key == "id" {
                let found: RecipeId = decode(key, ID_SHAPE, value)?;
                if self.id.is_assigned() && found != self.id {
                    return Err(ModelError::IdMismatch {
                        expected: self.id,
                        found,
                    });
                }
            }
            match next.assign(key, value, policy)? {
                Assigned::Field | Assigned::Retained => summary.applied.push(key.clone()),
                Assigned::Dropped => summary.skipped.push(key.clone()),
            }
        }

        *self = next;
        tracing::debug!(
            recipe = %self.id,
            applied = summary.applied.len(),
            skipped = summary.skipped.len(),
            "applied recipe patch"
        );
        Ok(summary)
    }

    /// The wire-shaped mapping of this recipe.
    pub fn to_data(&self) -> Result<PropertyBag, ModelError> {
        PropertyBag::from_value(serde_json::to_value(self)?)
    }

    /// Keys retained outside the declared field set.
    pub fn undeclared_fields(&self) -> impl Iterator<Item = &str> {
        self.extra
            .keys()
            .map(String::as_str)
            .filter(|k| !Self::FIELDS.contains(k))
    }
}

impl Serialize for Recipe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        if let Some(user_id) = &self.user_id {
            map.serialize_entry("userId", user_id)?;
        }
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("description", &self.description)?;
        map.serialize_entry("imagePath", &self.image_path)?;
        map.serialize_entry("ingredients", &self.ingredients)?;
        map.serialize_entry("position", &self.position)?;
        for (key, value) in &self.extra {
            if !Self::FIELDS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Order recipes by their position hint, breaking ties by id.
///
/// The sort is stable: recipes with equal position and id keep their
/// relative order.
pub fn sort_by_position(recipes: &mut [Recipe]) {
    recipes.sort_by_key(|r| (r.position, r.id));
}

fn decode<T: DeserializeOwned>(
    field: &str,
    expected: &'static str,
    value: &Value,
) -> Result<T, ModelError> {
    T::deserialize(value).map_err(|source| ModelError::FieldType {
        field: field.to_string(),
        expected,
        source,
    })
}
