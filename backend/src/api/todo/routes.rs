//! Defines the HTTP routes for the todo collection.
//!
//! These routes map the CRUD paths to handler functions. No token is checked
//! here; the collection is global and unauthenticated.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn todo_router() -> Router<AppState> {
    Router::new()
        .route("/posting", post(handlers::create_todo))
        .route("/getting", get(handlers::list_todos))
        .route("/updating/{id}", put(handlers::update_todo))
        .route("/deleting/{id}", delete(handlers::delete_todo))
}
