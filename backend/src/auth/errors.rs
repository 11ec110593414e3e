//! Custom error types specific to authentication failures.
//!
//! Expected credential failures map to 400 with a small fixed vocabulary;
//! anything unexpected (hashing or signing failure, store outage during
//! lookup) maps to a generic 500. All variants render as JSON `{"error": …}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Any signup persistence failure. Causes are deliberately not
    /// distinguished from the unique-email violation.
    #[error("Email already exists")]
    EmailExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Something went wrong")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    pub fn internal(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(source))
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            AuthError::Internal(ref source) => {
                tracing::error!("auth failure: {source}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
