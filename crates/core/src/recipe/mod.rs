//! Recipe entity and its validation rules.

mod error;
pub mod fields;
mod types;
mod validation;

pub use error::{LocationConflict, RecipeError};
pub use types::{
    recipe_id_from_title, Difficulty, Ingredient, Location, Recipe, RecipeList, RECOGNISED_UNITS,
};
pub use validation::{validate_location, validate_recipe, ValidationMode};
