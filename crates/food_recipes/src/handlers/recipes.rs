use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use food_recipes_core::{
    page::calculate_page,
    patch::{parse_patches, validate_patches, Operation},
    recipe::{validate_recipe, Recipe, RecipeList, ValidationMode},
    storage::RepositoryError,
};
use serde::Deserialize;

use crate::{handlers::AppError, patching::apply_replacements, state::AppState};

/// Operations a recipe accepts in a PATCH document.
pub const RECIPE_PATCH_OPERATIONS: [Operation; 1] = [Operation::Replace];

/// Raw pagination parameters; parsed by the page calculator so that bad values
/// are reported with the text the caller sent.
#[derive(Debug, Default, Deserialize)]
pub struct ListRecipesQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

fn parse_recipe(body: &[u8]) -> Result<Recipe, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "failed to parse recipe body");
        AppError::bad_request_message("failed to parse json body")
    })
}

async fn find_recipe(state: &AppState, id: &str) -> Result<Recipe, AppError> {
    let recipe = state
        .recipe_repo
        .get_recipe(id)
        .await?
        .ok_or_else(|| RepositoryError::recipe_not_found(id))?;
    Ok(recipe)
}

/// List recipes a page at a time (GET /recipes).
#[axum::debug_handler]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<ListRecipesQuery>,
) -> Result<Json<RecipeList>, AppError> {
    let page = calculate_page(
        &state.page_config(),
        query.limit.as_deref(),
        query.offset.as_deref(),
    )
    .map_err(|errors| AppError::bad_request(&errors))?;

    let (items, total_count) = state.recipe_repo.list_recipes(page).await?;

    Ok(Json(RecipeList {
        count: items.len(),
        items,
        limit: page.limit,
        offset: page.offset,
        total_count,
    }))
}

/// Get a single recipe (GET /recipes/{id}).
#[axum::debug_handler]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(find_recipe(&state, &id).await?))
}

/// Create a recipe (POST /recipes). The id is derived from the title.
#[axum::debug_handler]
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let mut recipe = parse_recipe(&body)?;

    validate_recipe(&mut recipe, ValidationMode::Create)
        .map_err(|errors| AppError::bad_request(&errors))?;
    recipe.assign_id();

    state.recipe_repo.create_recipe(&recipe).await?;
    tracing::info!(id = %recipe.id, "recipe created");

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Replace a recipe's contents (PUT /recipes/{id}).
///
/// The body must not carry a title; the stored title and id are kept.
#[axum::debug_handler]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Recipe>, AppError> {
    let mut recipe = parse_recipe(&body)?;

    validate_recipe(&mut recipe, ValidationMode::Update)
        .map_err(|errors| AppError::bad_request(&errors))?;

    let existing = find_recipe(&state, &id).await?;
    recipe.id = existing.id;
    recipe.title = existing.title;

    state.recipe_repo.update_recipe(&recipe).await?;
    tracing::info!(id = %recipe.id, "recipe updated");

    Ok(Json(recipe))
}

/// Apply a JSON Patch document to a recipe (PATCH /recipes/{id}).
#[axum::debug_handler]
pub async fn patch_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Recipe>, AppError> {
    let patches =
        parse_patches(&body).map_err(|err| AppError::bad_request_message(err.to_string()))?;

    validate_patches(&patches, Some(RECIPE_PATCH_OPERATIONS.as_slice()))
        .map_err(|violations| AppError::bad_request(&violations))?;

    let existing = find_recipe(&state, &id).await?;
    let mut patched = apply_replacements(&existing, &patches)
        .map_err(|body| AppError::rejected(StatusCode::BAD_REQUEST, body))?;

    validate_recipe(&mut patched, ValidationMode::Create)
        .map_err(|errors| AppError::bad_request(&errors))?;

    state.recipe_repo.update_recipe(&patched).await?;
    tracing::info!(id = %patched.id, patches = patches.len(), "recipe patched");

    Ok(Json(patched))
}

/// Delete a recipe (DELETE /recipes/{id}).
#[axum::debug_handler]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.recipe_repo.delete_recipe(&id).await?;
    tracing::info!(%id, "recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}
