//! # bakery-core — Recipe Data Model
//!
//! Typed model of the recipes managed by the bakery application, and the
//! explicit conversion that turns loosely-typed property mappings (decoded
//! response bodies, form models, files) into it.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `RecipeId`, `UserId`, `IngredientId` are
//!    distinct types. No bare integers for references.
//!
//! 2. **Explicit field conversion.** [`Recipe::set_field`] lists every
//!    declared field by its wire key. Keys outside [`Recipe::FIELDS`] are
//!    handled by a [`ConversionPolicy`], never copied silently.
//!
//! 3. **Own properties only.** A [`PropertyBag`] can inherit values from a
//!    parent bag; conversion never copies inherited values.
//!
//! 4. **All-or-nothing.** Construction and patching either succeed fully
//!    or return a [`ModelError`] without a partially updated entity.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O. Persistence and transport belong to collaborators.

pub mod bag;
pub mod error;
pub mod identity;
pub mod ingredient;
pub mod policy;
pub mod recipe;

// Re-export primary types for ergonomic imports.
pub use bag::PropertyBag;
pub use error::ModelError;
pub use identity::{IngredientId, RecipeId, UserId};
pub use ingredient::Ingredient;
pub use policy::{ConversionPolicy, UnknownFields};
pub use recipe::{sort_by_position, PatchSummary, Recipe};
