//! API error types with IntoResponse
//!
//! 404s render as a plain-text sentence embedding the requested id;
//! every other error renders as a JSON envelope with an appropriate
//! status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Path id was not a valid integer (400)
    InvalidId { value: String },

    /// Request body could not be decoded (400)
    BadRequest { message: String },

    /// Recipe not found (404, plain-text body)
    NotFound { id: i64 },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidId { value } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_id",
                    "message": format!("'{}' is not a valid recipe id", value)
                })),
            )
                .into_response(),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "bad_request",
                    "message": message
                })),
            )
                .into_response(),
            Self::NotFound { id } => (
                StatusCode::NOT_FOUND,
                format!("Recipe with ID {id} not found"),
            )
                .into_response(),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn invalid_id_is_400() {
        let err = ApiError::InvalidId {
            value: "abc".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_plain_text_404_embedding_id() {
        let err = ApiError::NotFound { id: 999999 };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("999999"));
    }

    #[tokio::test]
    async fn database_error_is_500() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn not_found_db_error_maps_to_404() {
        let err = ApiError::from(DbError::NotFound { id: 42 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
