//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use food_recipes_core::page::Page;
use food_recipes_core::recipe::Recipe;
use food_recipes_core::storage::{RecipeRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Recipes are keyed by id. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    recipes: Arc<RwLock<BTreeMap<String, Recipe>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `recipes`. Later duplicates of an id win.
    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let recipes = recipes
            .into_iter()
            .map(|recipe| (recipe.id.clone(), recipe))
            .collect();

        Self {
            recipes: Arc::new(RwLock::new(recipes)),
        }
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.get(id).cloned())
    }

    async fn list_recipes(&self, page: Page) -> Result<(Vec<Recipe>, usize)> {
        let recipes = self.recipes.read().await;
        let total = recipes.len();
        let bounds = page.bounds(total);

        let items = recipes
            .values()
            .skip(bounds.start)
            .take(bounds.len())
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        if recipes.contains_key(&recipe.id) {
            return Err(RepositoryError::recipe_already_exists(&recipe.id));
        }
        recipes.insert(recipe.id.clone(), recipe.clone());
        Ok(())
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        match recipes.get_mut(&recipe.id) {
            Some(existing) => {
                *existing = recipe.clone();
                Ok(())
            }
            None => Err(RepositoryError::recipe_not_found(&recipe.id)),
        }
    }

    async fn delete_recipe(&self, id: &str) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        recipes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::recipe_not_found(id))
    }
}
