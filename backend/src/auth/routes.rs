//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user signup and login and are merged into the main
//! Axum router at startup.

use axum::routing::post;
use axum::Router;

use super::handlers::{login, signup};
use crate::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}
