//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers of the recipe model. These prevent
//! accidental identifier confusion: you cannot pass a `UserId` where a
//! `RecipeId` is expected.
//!
//! Identifiers are assigned by the persistence layer that owns the entity.
//! The model only carries them as weak references.

use serde::{Deserialize, Serialize};

/// Identifier of a recipe. `0` means "not yet assigned".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

/// Identifier of the user owning a recipe.
///
/// On the wire the owner arrives either as a bare integer or as the nested
/// user entity (`{"id": 7, "username": ...}`); both decode to the same id.
/// Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "UserRef")]
pub struct UserId(pub u64);

/// Identifier of an ingredient entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IngredientId(pub u64);

/// Accepted wire shapes for an owning-user reference.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserRef {
    Bare(u64),
    Entity { id: u64 },
}

impl From<UserRef> for UserId {
    fn from(r: UserRef) -> Self {
        match r {
            UserRef::Bare(id) | UserRef::Entity { id } => Self(id),
        }
    }
}

impl RecipeId {
    /// The placeholder id of a recipe that has not been persisted yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Whether the persistence layer has assigned this id.
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    /// Access the inner value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl UserId {
    /// Access the inner value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl IngredientId {
    /// Access the inner value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recipe:{}", self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ingredient:{}", self.0)
    }
}
