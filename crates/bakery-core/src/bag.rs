//! # Property Bags
//!
//! A `PropertyBag` is the loosely-typed input handed to the model by its
//! collaborators: a decoded response body, a form model, a file on disk.
//! It holds its own properties and may be layered over
//! a shared parent bag whose properties are visible through [`get`] but are
//! *not* own properties.
//!
//! Conversion into typed entities only ever reads own properties. Values
//! visible solely through the parent are never copied.
//!
//! [`get`]: PropertyBag::get

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{json_type_name, ModelError};

/// String-keyed property mapping with an optional inherited layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    own: Map<String, Value>,
    parent: Option<Arc<PropertyBag>>,
}

impl PropertyBag {
    /// Create an empty bag with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object as the bag's own properties.
    pub fn from_map(own: Map<String, Value>) -> Self {
        Self { own, parent: None }
    }

    /// Build a bag from an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAMapping`] unless the value is an object.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ModelError::NotAMapping {
                found: json_type_name(&other),
            }),
        }
    }

    /// Layer this bag over a shared parent.
    pub fn with_parent(mut self, parent: Arc<PropertyBag>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The inherited layer, if any.
    pub fn parent(&self) -> Option<&Arc<PropertyBag>> {
        self.parent.as_ref()
    }

    /// Set an own property, returning the previous own value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.own.insert(key.into(), value)
    }

    /// Remove an own property. Inherited values stay visible.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.own.remove(key)
    }

    /// Look a key up, falling through to the parent chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.own.get(key) {
            Some(v) => Some(v),
            None => self.parent.as_deref().and_then(|p| p.get(key)),
        }
    }

    /// Look a key up among own properties only.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.own.get(key)
    }

    /// Whether `key` is an own property of this bag.
    pub fn has_own_property(&self, key: &str) -> bool {
        self.own.contains_key(key)
    }

    /// Iterate own properties.
    pub fn own_entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.own.iter()
    }

    /// Number of own properties.
    pub fn own_len(&self) -> usize {
        self.own.len()
    }

    /// True when the bag has no own properties.
    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }

    /// Consume the bag, keeping own properties only.
    pub fn into_map(self) -> Map<String, Value> {
        self.own
    }
}

impl From<Map<String, Value>> for PropertyBag {
    fn from(own: Map<String, Value>) -> Self {
        Self::from_map(own)
    }
}

impl TryFrom<Value> for PropertyBag {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl Serialize for PropertyBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.own.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_map)
    }
}
