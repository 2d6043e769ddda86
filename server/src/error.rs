//! HTTP mapping for handler failures.
//!
//! Not-found (which covers malformed identifiers too) is a bare 404; a
//! store failure is a 400 carrying a single consistent `{"error": msg}`
//! envelope on every operation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todos_core::StoreError;

/// Failures a resource handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record matched, or the identifier failed its shape check.
    #[error("todo not found")]
    NotFound,

    /// The persistence layer failed the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(err) => {
                tracing::warn!(error = %err, "store operation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
