//! Applying validated `replace` operations to a stored recipe.
//!
//! The recipe is round-tripped through a JSON document so each patch path is
//! resolved as a JSON pointer against the recipe's wire shape.

use food_recipes_core::{
    error::ApiError,
    patch::PatchOperation,
    recipe::{Recipe, RecipeError},
    ErrorObject, ErrorResponse,
};

const APPLY_FAILED: &str = "failed to apply patch to recipe";
const MISSING_TARGET: &str = "patch path does not exist in recipe";

/// Paths that would change a recipe's identity.
fn targets_identity(path: &str) -> bool {
    matches!(path, "/title" | "/id")
}

/// Apply every `replace` in `patches` to a copy of `recipe`.
///
/// Patches must already have passed validation. A path that targets the title
/// or id, or that does not resolve in the recipe document, is reported with the
/// index of the offending operation. Nothing is applied unless every patch is.
pub fn apply_replacements(
    recipe: &Recipe,
    patches: &[PatchOperation],
) -> Result<Recipe, ErrorResponse> {
    let mut document =
        serde_json::to_value(recipe).map_err(|_| ErrorResponse::message(APPLY_FAILED))?;
    let mut errors = Vec::new();

    for (index, patch) in patches.iter().enumerate() {
        if targets_identity(&patch.path) {
            errors.push(RecipeError::TitleImmutable(recipe.title.clone()).to_error_object());
            continue;
        }

        let Some(value) = patch.value.clone() else {
            continue;
        };

        match document.pointer_mut(&patch.path) {
            Some(target) => *target = value,
            None => errors.push(
                ErrorObject::new(MISSING_TARGET).with_value(format!("[{index}].path"), &patch.path),
            ),
        }
    }

    if !errors.is_empty() {
        return Err(errors.into());
    }

    let mut patched: Recipe =
        serde_json::from_value(document).map_err(|_| ErrorResponse::message(APPLY_FAILED))?;
    patched.id.clone_from(&recipe.id);
    Ok(patched)
}

#[cfg(test)]
mod tests {
    use food_recipes_core::recipe::{Ingredient, Location};
    use serde_json::json;

    use super::*;

    fn pie() -> Recipe {
        let mut recipe = Recipe {
            title: "Chicken Pie".to_string(),
            cook_time: 90,
            difficulty: "moderate".to_string(),
            ingredients: vec![
                Ingredient::new("chicken thighs", 600).with_unit("g"),
                Ingredient::new("puff pastry", 1),
            ],
            location: Location::in_cook_book("Family Favourites", 42),
            portion_size: 4,
            ..Default::default()
        };
        recipe.assign_id();
        recipe
    }

    fn replace(path: &str, value: serde_json::Value) -> PatchOperation {
        PatchOperation::new("replace", path).with_value(value)
    }

    #[test]
    fn test_replace_top_level_fields() {
        let patched = apply_replacements(
            &pie(),
            &[replace("/cook_time", json!(75)), replace("/favourite", json!(true))],
        )
        .unwrap();

        assert_eq!(patched.cook_time, 75);
        assert!(patched.favourite);
        assert_eq!(patched.id, "chicken-pie");
        assert_eq!(patched.title, "Chicken Pie");
    }

    #[test]
    fn test_replace_nested_field() {
        let patched =
            apply_replacements(&pie(), &[replace("/ingredients/1/quantity", json!(2))]).unwrap();

        assert_eq!(patched.ingredients[1].quantity, 2);
        assert_eq!(patched.ingredients[0], pie().ingredients[0]);
    }

    #[test]
    fn test_title_cannot_be_replaced() {
        let errors = apply_replacements(&pie(), &[replace("/title", json!("Beef Pie"))])
            .unwrap_err()
            .errors;

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].error,
            "not allowed to change the existing title for recipe"
        );
        assert_eq!(errors[0].error_values["title"], "Chicken Pie");
    }

    #[test]
    fn test_missing_target_reports_index() {
        let errors = apply_replacements(
            &pie(),
            &[replace("/cook_time", json!(10)), replace("/ingredients/9/item", json!("salt"))],
        )
        .unwrap_err()
        .errors;

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error, MISSING_TARGET);
        assert_eq!(errors[0].error_values["[1].path"], "/ingredients/9/item");
    }

    #[test]
    fn test_wrongly_typed_value_is_rejected() {
        let error = apply_replacements(&pie(), &[replace("/cook_time", json!("slow"))]).unwrap_err();

        assert_eq!(error, ErrorResponse::message(APPLY_FAILED));
    }
}
