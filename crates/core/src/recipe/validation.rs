use super::error::{LocationConflict, RecipeError};
use super::fields::{is_negative, is_non_empty, is_non_zero, is_one_of};
use super::types::{Difficulty, Ingredient, Location, Recipe, RECOGNISED_UNITS};

/// Whether a recipe is being created or replacing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// A title is required.
    Create,
    /// The title belongs to the stored recipe and must not be supplied.
    Update,
}

/// Collects violations as checks run.
#[derive(Debug, Default)]
struct Violations {
    missing: Vec<String>,
    errors: Vec<RecipeError>,
}

impl Violations {
    fn require(&mut self, present: bool, field: impl Into<String>) {
        if !present {
            self.missing.push(field.into());
        }
    }

    fn reject(&mut self, error: RecipeError) {
        self.errors.push(error);
    }

    fn finish(self) -> Result<(), Vec<RecipeError>> {
        let mut errors = Vec::with_capacity(self.errors.len() + 1);
        if !self.missing.is_empty() {
            errors.push(RecipeError::MissingFields(self.missing));
        }
        errors.extend(self.errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validate a recipe, lower-casing its difficulty in place.
///
/// Every rule runs; the error list holds all violations found. Missing fields
/// are reported together in a single [`RecipeError::MissingFields`].
pub fn validate_recipe(recipe: &mut Recipe, mode: ValidationMode) -> Result<(), Vec<RecipeError>> {
    let mut violations = Violations::default();

    violations.require(is_non_zero(recipe.cook_time), "cook_time");

    // Stored recipes always carry the lower-case form, valid or not.
    recipe.difficulty = recipe.difficulty.to_lowercase();
    if recipe.difficulty.parse::<Difficulty>().is_err() {
        violations.reject(RecipeError::InvalidDifficulty(recipe.difficulty.clone()));
    }

    check_ingredients(&mut violations, "extra_ingredients", &recipe.extra_ingredients);
    violations.require(!recipe.ingredients.is_empty(), "ingredients");
    check_ingredients(&mut violations, "ingredients", &recipe.ingredients);

    if let Err(err) = validate_location(&recipe.location) {
        violations.reject(err);
    }

    violations.require(is_non_zero(recipe.portion_size), "portion_size");
    if is_negative(recipe.portion_size) {
        violations.reject(RecipeError::InvalidPortionSize(recipe.portion_size));
    }

    match mode {
        ValidationMode::Create => violations.require(is_non_empty(&recipe.title), "title"),
        ValidationMode::Update => {
            if is_non_empty(&recipe.title) {
                violations.reject(RecipeError::TitleImmutable(recipe.title.clone()));
            }
        }
    }

    violations.finish()
}

/// Check that a location is either a cook book page or a link, and not both.
pub fn validate_location(location: &Location) -> Result<(), RecipeError> {
    let has_cook_book = is_non_empty(location.cook_book());
    let has_link = is_non_empty(location.link());
    let page = location.page_number();
    let has_cook_book_part = has_cook_book || page != 0;

    let conflict = match (has_link, has_cook_book_part) {
        (true, false) => return Ok(()),
        (false, true) if has_cook_book && page > 0 => return Ok(()),
        (true, true) => LocationConflict::Both,
        (false, false) => LocationConflict::Neither,
        (false, true) => LocationConflict::PartialCookBook,
    };

    Err(RecipeError::InvalidLocation {
        conflict,
        cook_book: location.cook_book().to_string(),
        page,
        link: location.link().to_string(),
    })
}

fn check_ingredients(violations: &mut Violations, field: &str, ingredients: &[Ingredient]) {
    for (index, ingredient) in ingredients.iter().enumerate() {
        let prefix = format!("{field}.[{index}]");

        violations.require(is_non_empty(&ingredient.item), format!("{prefix}.item"));
        violations.require(is_non_zero(ingredient.quantity), format!("{prefix}.quantity"));

        if let Some(unit) = ingredient.unit.as_deref().filter(|unit| !unit.is_empty()) {
            if !is_one_of(unit, &RECOGNISED_UNITS) {
                violations.reject(RecipeError::InvalidUnit {
                    field: format!("{prefix}.unit"),
                    unit: unit.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::error::ApiError;

    fn valid_recipe() -> Recipe {
        Recipe {
            title: "Shepherd's Pie".to_string(),
            cook_time: 90,
            difficulty: "moderate".to_string(),
            favourite: true,
            ingredients: vec![
                Ingredient::new("lamb mince", 500).with_unit("g"),
                Ingredient::new("potatoes", 4),
            ],
            extra_ingredients: vec![Ingredient::new("peas", 1).with_unit("cups")],
            location: Location::in_cook_book("Family Favourites", 42),
            portion_size: 4,
            ..Default::default()
        }
    }

    fn error_keys(errors: &[RecipeError]) -> BTreeSet<String> {
        errors
            .iter()
            .flat_map(|err| err.error_values().into_keys())
            .collect()
    }

    #[test]
    fn test_valid_recipe_on_create() {
        let mut recipe = valid_recipe();
        assert_eq!(validate_recipe(&mut recipe, ValidationMode::Create), Ok(()));
    }

    #[test]
    fn test_valid_recipe_with_link() {
        let mut recipe = valid_recipe();
        recipe.location = Location::at_link("https://example.com/pie");

        assert_eq!(validate_recipe(&mut recipe, ValidationMode::Create), Ok(()));
    }

    #[test]
    fn test_difficulty_is_normalized() {
        let mut recipe = valid_recipe();
        recipe.difficulty = "HaRd".to_string();

        assert_eq!(validate_recipe(&mut recipe, ValidationMode::Create), Ok(()));
        assert_eq!(recipe.difficulty, "hard");
    }

    #[test]
    fn test_invalid_difficulty_is_normalized_and_stable() {
        let mut recipe = valid_recipe();
        recipe.difficulty = "Impossible".to_string();

        let first = validate_recipe(&mut recipe, ValidationMode::Create).unwrap_err();
        assert_eq!(recipe.difficulty, "impossible");

        let second = validate_recipe(&mut recipe, ValidationMode::Create).unwrap_err();
        assert_eq!(recipe.difficulty, "impossible");

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![RecipeError::InvalidDifficulty("impossible".to_string())]
        );
    }

    #[test]
    fn test_missing_fields_are_grouped() {
        let mut recipe = valid_recipe();
        recipe.cook_time = 0;
        recipe.portion_size = 0;
        recipe.title = String::new();
        recipe.ingredients = Vec::new();

        let errors = validate_recipe(&mut recipe, ValidationMode::Create).unwrap_err();

        assert_eq!(
            errors,
            vec![RecipeError::MissingFields(vec![
                "cook_time".to_string(),
                "ingredients".to_string(),
                "portion_size".to_string(),
                "title".to_string(),
            ])]
        );
    }

    #[test]
    fn test_every_violation_reported() {
        let mut recipe = Recipe {
            title: String::new(),
            cook_time: 0,
            difficulty: "Simple".to_string(),
            ingredients: vec![
                Ingredient::new("", 0),
                Ingredient::new("salt", 1).with_unit("pinch"),
            ],
            extra_ingredients: vec![
                Ingredient::new("cream", 2).with_unit("pints"),
                Ingredient::new("", 0),
            ],
            location: Location {
                cook_book: Some("Baking Basics".to_string()),
                page: None,
                link: None,
            },
            portion_size: -2,
            ..Default::default()
        };

        let errors = validate_recipe(&mut recipe, ValidationMode::Create).unwrap_err();

        // grouped missing fields + difficulty + 2 units + location + portion size
        assert_eq!(errors.len(), 6);
        assert_eq!(
            error_keys(&errors),
            BTreeSet::from(
                [
                    "cook_time",
                    "title",
                    "ingredients.[0].item",
                    "ingredients.[0].quantity",
                    "ingredients.[1].unit",
                    "extra_ingredients.[0].unit",
                    "extra_ingredients.[1].item",
                    "extra_ingredients.[1].quantity",
                    "difficulty",
                    "location.cook_book",
                    "location.page",
                    "location.link",
                    "portion_size",
                ]
                .map(String::from)
            )
        );
        assert!(errors.contains(&RecipeError::InvalidPortionSize(-2)));
        assert!(errors.iter().any(|err| matches!(
            err,
            RecipeError::InvalidLocation {
                conflict: LocationConflict::PartialCookBook,
                ..
            }
        )));
    }

    #[test]
    fn test_empty_extra_ingredients_allowed() {
        let mut recipe = valid_recipe();
        recipe.extra_ingredients = Vec::new();

        assert_eq!(validate_recipe(&mut recipe, ValidationMode::Create), Ok(()));
    }

    #[test]
    fn test_empty_unit_is_treated_as_absent() {
        let mut recipe = valid_recipe();
        recipe.ingredients[1].unit = Some(String::new());

        assert_eq!(validate_recipe(&mut recipe, ValidationMode::Create), Ok(()));
    }

    #[test]
    fn test_negative_quantity_is_allowed() {
        let mut recipe = valid_recipe();
        recipe.ingredients[0].quantity = -1;

        assert_eq!(validate_recipe(&mut recipe, ValidationMode::Create), Ok(()));
    }

    #[test]
    fn test_portion_size_checks_are_independent() {
        let mut recipe = valid_recipe();
        recipe.portion_size = 0;
        assert_eq!(
            validate_recipe(&mut recipe, ValidationMode::Create),
            Err(vec![RecipeError::MissingFields(vec![
                "portion_size".to_string()
            ])])
        );

        recipe.portion_size = -1;
        assert_eq!(
            validate_recipe(&mut recipe, ValidationMode::Create),
            Err(vec![RecipeError::InvalidPortionSize(-1)])
        );
    }

    #[test]
    fn test_update_rejects_title() {
        let mut recipe = valid_recipe();

        assert_eq!(
            validate_recipe(&mut recipe, ValidationMode::Update),
            Err(vec![RecipeError::TitleImmutable(
                "Shepherd's Pie".to_string()
            )])
        );
    }

    #[test]
    fn test_update_without_title() {
        let mut recipe = valid_recipe();
        recipe.title = String::new();

        assert_eq!(validate_recipe(&mut recipe, ValidationMode::Update), Ok(()));
    }

    #[test]
    fn test_location_both_supplied() {
        let location = Location {
            cook_book: Some("Baking Basics".to_string()),
            page: Some(10),
            link: Some("https://example.com".to_string()),
        };

        assert!(matches!(
            validate_location(&location),
            Err(RecipeError::InvalidLocation {
                conflict: LocationConflict::Both,
                ..
            })
        ));
    }

    #[test]
    fn test_location_link_with_page_only() {
        let location = Location {
            cook_book: None,
            page: Some(3),
            link: Some("https://example.com".to_string()),
        };

        assert!(matches!(
            validate_location(&location),
            Err(RecipeError::InvalidLocation {
                conflict: LocationConflict::Both,
                ..
            })
        ));
    }

    #[test]
    fn test_location_neither_supplied() {
        let location = Location {
            cook_book: Some("  ".to_string()),
            page: None,
            link: Some(String::new()),
        };

        assert_eq!(
            validate_location(&location),
            Err(RecipeError::InvalidLocation {
                conflict: LocationConflict::Neither,
                cook_book: "  ".to_string(),
                page: 0,
                link: String::new(),
            })
        );
    }

    #[test]
    fn test_location_partial_cook_book() {
        let page_only = Location {
            cook_book: None,
            page: Some(7),
            link: None,
        };
        let negative_page = Location::in_cook_book("Baking Basics", -7);

        for location in [page_only, negative_page] {
            assert!(matches!(
                validate_location(&location),
                Err(RecipeError::InvalidLocation {
                    conflict: LocationConflict::PartialCookBook,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_location_exactly_one() {
        assert_eq!(
            validate_location(&Location::in_cook_book("Baking Basics", 1)),
            Ok(())
        );
        assert_eq!(
            validate_location(&Location::at_link("https://example.com")),
            Ok(())
        );
    }
}
