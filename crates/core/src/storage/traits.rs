use async_trait::async_trait;

use crate::page::Page;
use crate::recipe::Recipe;

use super::Result;

/// Repository for recipe operations.
///
/// Recipes are keyed by their `id`, which is derived from the title.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Gets a recipe by its ID.
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>>;

    /// Gets one page of recipes ordered by ID, along with the total count.
    async fn list_recipes(&self, page: Page) -> Result<(Vec<Recipe>, usize)>;

    /// Creates a new recipe. Fails with `AlreadyExists` if the ID is taken.
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Replaces an existing recipe.
    async fn update_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Deletes a recipe by its ID.
    async fn delete_recipe(&self, id: &str) -> Result<()>;
}
