//! # Recipe Construction Tests
//!
//! Exercises the public conversion surface the way its collaborators use
//! it: decoded HTTP bodies from the backend, form models layered over
//! shared template values, and YAML documents from disk.

use std::sync::Arc;

use bakery_core::{
    sort_by_position, ConversionPolicy, ModelError, PropertyBag, Recipe, RecipeId, UnknownFields,
    UserId,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Backend response bodies
// ---------------------------------------------------------------------------

#[test]
fn backend_response_with_nested_owner() {
    let body = json!({
        "id": 17,
        "userId": {"id": 2, "username": "marie", "role": "SUPERUSER"},
        "name": "Pain de campagne",
        "description": "Country loaf with levain",
        "imagePath": "uploads/campagne.jpg",
        "ingredients": [
            {"id": 1, "name": "bread flour", "quantity": 900, "unit": "g"},
            {"id": 2, "name": "whole wheat flour", "quantity": 100, "unit": "g"},
            {"id": 3, "name": "water", "quantity": 750, "unit": "ml"}
        ],
        "position": 0
    });

    let recipe = Recipe::from_value(&body).unwrap();
    assert_eq!(recipe.id, RecipeId(17));
    assert_eq!(recipe.user_id, Some(UserId(2)));
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.ingredients[2].unit, "ml");
    assert!(recipe.extra.is_empty());

    // Re-exported wire shape flattens the owner to its id.
    let data = recipe.to_data().unwrap();
    assert_eq!(data.get_own("userId"), Some(&json!(2)));
}

#[test]
fn list_response_sorted_by_position() {
    let body = json!([
        {"id": 1, "name": "Baguette", "position": 2},
        {"id": 2, "name": "Croissant", "position": 0},
        {"id": 3, "name": "Brioche", "position": 1}
    ]);
    let mut recipes: Vec<Recipe> = serde_json::from_value(body).unwrap();
    sort_by_position(&mut recipes);
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Croissant", "Brioche", "Baguette"]);
}

// ---------------------------------------------------------------------------
// Form models
// ---------------------------------------------------------------------------

#[test]
fn new_recipe_form_has_unassigned_id() {
    let mut form = PropertyBag::new();
    form.insert("name", json!("Kouign-amann"));
    form.insert("userId", json!(5));
    let recipe = Recipe::from_data(&form).unwrap();
    assert!(!recipe.id.is_assigned());
    assert_eq!(recipe.user_id, Some(UserId(5)));
}

#[test]
fn form_over_template_copies_own_fields_only() {
    let mut template = PropertyBag::new();
    template.insert("imagePath", json!("placeholder.png"));
    template.insert("notes", json!("seasonal"));
    let template = Arc::new(template);

    let mut form = PropertyBag::new().with_parent(Arc::clone(&template));
    form.insert("name", json!("Stollen"));

    let recipe = Recipe::from_data_with(&form, &ConversionPolicy::STRICT).unwrap();
    assert_eq!(recipe.name, "Stollen");
    assert!(recipe.image_path.is_empty());
    assert!(recipe.extra.is_empty());
}

#[test]
fn edit_form_patch_keeps_untouched_fields() {
    let mut recipe = Recipe::from_value(&json!({
        "id": 8, "name": "Rye", "description": "dense", "position": 4
    }))
    .unwrap();

    let mut patch = PropertyBag::new();
    patch.insert("id", json!(8));
    patch.insert("description", json!("dense, sour"));
    patch.insert("imagePath", serde_json::Value::Null);

    let summary = recipe.apply_patch(&patch, &ConversionPolicy::default()).unwrap();
    assert_eq!(recipe.description, "dense, sour");
    assert_eq!(recipe.name, "Rye");
    assert_eq!(recipe.position, 4);
    assert_eq!(summary.applied.len(), 2);
    assert_eq!(summary.skipped, vec!["imagePath".to_string()]);
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

#[test]
fn policies_differ_only_in_undeclared_keys() {
    let body = json!({"name": "Scone", "notes": "x"});

    let retained = Recipe::from_value_with(&body, &ConversionPolicy::LENIENT).unwrap();
    assert_eq!(retained.extra.get("notes"), Some(&json!("x")));

    let dropped = Recipe::from_value_with(
        &body,
        &ConversionPolicy {
            unknown_fields: UnknownFields::Drop,
        },
    )
    .unwrap();
    assert_eq!(dropped.name, "Scone");
    assert!(dropped.extra.is_empty());

    let rejected = Recipe::from_value_with(&body, &ConversionPolicy::STRICT);
    assert!(matches!(rejected, Err(ModelError::UnknownField { .. })));
}

#[test]
fn yaml_document_decodes_like_json() {
    let yaml = "\
name: Madeleine
position: 3
ingredients:
  - name: butter
    quantity: 125
    unit: g
";
    let recipe: Recipe = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(recipe.name, "Madeleine");
    assert_eq!(recipe.position, 3);
    assert_eq!(recipe.ingredients[0].quantity, Some(125.0));
}
