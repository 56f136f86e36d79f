//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Not-found is not an error here; handlers answer it with an empty 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Email already on file (409)
    DuplicateEmail { email: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::DuplicateEmail { email } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "duplicate_email",
                    "message": format!("employee already exists with email '{}'", email)
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::DuplicateEmail(email) => Self::DuplicateEmail { email },
            ServiceError::Validation(e) => Self::Validation(e),
            ServiceError::Store(e) => Self::Database(e),
        }
    }
}
