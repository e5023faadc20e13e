//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store detail never reaches the caller: it is logged here and replaced
//! with the endpoint's generic public message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { message: &'static str },

    /// Store or connectivity error (500, logged)
    Database {
        /// Client-facing message for this endpoint
        public: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Wrap a store error with the endpoint's public message.
    pub fn db(public: &'static str, source: DbError) -> Self {
        Self::Database { public, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": e.to_string() }),
            ),
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                json!({ "error": message }),
            ),
            Self::Database { public, source } => {
                // Log the actual error, return the generic message
                tracing::error!(error = %source, "database error: {}", public);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": public }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Invalid { field: "id" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "id inválido");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            message: "Cliente no encontrado",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn database_error_is_500_with_public_message_only() {
        let err = ApiError::db(
            "Error consultando clientes",
            DbError::Sqlx(sqlx::Error::PoolClosed),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Error consultando clientes");
    }
}
