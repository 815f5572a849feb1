use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::coach::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// AI provider failures are deliberately absent: they are recovered by the
/// fallback path and never reach the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Validation(err) => {
                let body = json!({
                    "success": false,
                    "error": "VALIDATION_ERROR",
                    "message": err.to_string(),
                    "errors": err.errors,
                });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                json!({
                    "success": false,
                    "error": "DATABASE_ERROR",
                    "message": "A database error occurred",
                })
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                json!({
                    "success": false,
                    "error": "INTERNAL_ERROR",
                    "message": "An internal server error occurred",
                })
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
