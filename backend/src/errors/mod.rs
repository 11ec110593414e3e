//! Global application error types and handlers.
//!
//! This module defines the error type shared by the todo endpoints and its
//! mapping to HTTP responses. Expected failures (no record matched) become a
//! 404; everything else collapses into a generic 500, with the underlying
//! cause logged server-side and never surfaced to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the todo CRUD endpoints. All variants render as plain
/// text, matching the non-JSON failure contract of these routes.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo not found")]
    NotFound,
    /// Store-level or id-parsing failure. The caller only ever sees
    /// `message`; `source` goes to the log.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl TodoError {
    pub fn internal(
        message: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal {
            message,
            source: Box::new(source),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        match self {
            TodoError::NotFound => (StatusCode::NOT_FOUND, "Todo not found").into_response(),
            TodoError::Internal { message, source } => {
                tracing::error!("{message}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
