//! Shared application state.

use std::sync::Arc;

use food_recipes_core::page::PageConfig;
use food_recipes_core::storage::RecipeRepository;

use crate::{config::Config, mock_data::generate_demo_recipes, storage::InMemoryRepository};

/// Shared application state.
///
/// Cloned for each request handler. Storage is reached through the
/// repository trait object.
#[derive(Clone)]
pub struct AppState {
    pub recipe_repo: Arc<dyn RecipeRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(recipe_repo: Arc<dyn RecipeRepository>, config: Config) -> Self {
        Self {
            recipe_repo,
            config: Arc::new(config),
        }
    }

    /// In-memory storage, optionally seeded with the demo recipes.
    pub fn in_memory(config: Config) -> Self {
        let repo = if config.seed_demo_data {
            InMemoryRepository::with_recipes(generate_demo_recipes())
        } else {
            InMemoryRepository::new()
        };

        Self::new(Arc::new(repo), config)
    }

    pub fn page_config(&self) -> PageConfig {
        self.config.page_config()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(Config::default())
    }
}
