//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::RecipeDraft;

/// Extract the `{id}` path parameter as an integer.
///
/// Non-numeric input is rejected with 400 rather than silently coerced
/// to a lookup for id 0.
pub struct RecipeId(pub i64);

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId {
                value: String::new(),
            })?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidId { value: raw })?;

        Ok(Self(id))
    }
}

/// Decode a recipe body, rejecting malformed JSON with 400.
///
/// Missing fields still default to empty strings; only bodies that
/// fail to parse at all are rejected.
pub struct RecipeBody(pub RecipeDraft);

impl<S> FromRequest<S> for RecipeBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(draft) = Json::<RecipeDraft>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(draft))
    }
}
