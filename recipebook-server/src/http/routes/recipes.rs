//! Recipe endpoints
//!
//! Each handler maps to exactly one repository call; there is no
//! intermediate business logic.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::RecipeRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecipeBody, RecipeId};
use crate::http::server::AppState;
use crate::models::Recipe;

/// Response for a successful create
#[derive(Serialize)]
pub struct RecipeCreated {
    pub message: &'static str,
    pub id: i64,
}

/// Response for a successful update or delete
#[derive(Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// GET /recipes - list all recipes
async fn list_recipes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = RecipeRepo::new(&state.pool).list().await?;
    Ok(Json(recipes))
}

/// GET /recipes/{id} - get a single recipe
async fn get_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = RecipeRepo::new(&state.pool).get(id).await?;
    Ok(Json(recipe))
}

/// POST /recipes/add - insert a new recipe
///
/// An `ID` key in the body is ignored; storage assigns the id.
async fn add_recipe(
    State(state): State<Arc<AppState>>,
    RecipeBody(draft): RecipeBody,
) -> Result<(StatusCode, Json<RecipeCreated>), ApiError> {
    let id = RecipeRepo::new(&state.pool).create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecipeCreated {
            message: "recipe created",
            id,
        }),
    ))
}

/// PUT|PATCH /recipes/{id}/update - overwrite all three text fields
async fn update_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    RecipeBody(draft): RecipeBody,
) -> Result<Json<StatusMessage>, ApiError> {
    RecipeRepo::new(&state.pool).update(id, &draft).await?;
    Ok(Json(StatusMessage {
        message: "recipe updated",
    }))
}

/// DELETE /recipes/{id}/delete - remove a recipe
async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
) -> Result<Json<StatusMessage>, ApiError> {
    RecipeRepo::new(&state.pool).delete(id).await?;
    Ok(Json(StatusMessage {
        message: "recipe deleted",
    }))
}

/// Recipe routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipes/add", post(add_recipe))
        .route("/recipes/{id}", get(get_recipe))
        .route(
            "/recipes/{id}/update",
            put(update_recipe).patch(update_recipe),
        )
        .route("/recipes/{id}/delete", delete(delete_recipe))
}
