//! Handler functions for the todo CRUD API.
//!
//! Each handler performs exactly one persistence call. Successes return the
//! stored record as JSON (delete returns a plain-text confirmation); failures
//! follow the two-tier contract in `crate::errors`.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Todo;
use crate::database::queries;
use crate::errors::TodoError;
use crate::AppState;

/// Body for create and update. Unknown extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct TodoBody {
    pub todo: String,
}

/// POST /posting — persist a new todo and return it, generated id included.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<TodoBody>,
) -> Result<Json<Todo>, TodoError> {
    queries::insert_todo(&state.db, &body.todo)
        .await
        .map(Json)
        .map_err(|err| TodoError::internal("Something went wrong", err))
}

/// GET /getting — return every todo, no pagination or ordering guarantee.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, TodoError> {
    queries::list_todos(&state.db)
        .await
        .map(Json)
        .map_err(|err| TodoError::internal("Failed to retrieve todos", err))
}

/// PUT /updating/{id} — replace the text of the matching todo.
///
/// A malformed id is indistinguishable from a store failure to the caller:
/// both are a 500.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TodoBody>,
) -> Result<Json<Todo>, TodoError> {
    let id = Uuid::parse_str(&id).map_err(|err| TodoError::internal("Failed to update todo", err))?;
    queries::update_todo(&state.db, &id.to_string(), &body.todo)
        .await
        .map_err(|err| TodoError::internal("Failed to update todo", err))?
        .map(Json)
        .ok_or(TodoError::NotFound)
}

/// DELETE /deleting/{id} — remove the matching todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, TodoError> {
    let id = Uuid::parse_str(&id).map_err(|err| TodoError::internal("Failed to delete todo", err))?;
    let removed = queries::delete_todo(&state.db, &id.to_string())
        .await
        .map_err(|err| TodoError::internal("Failed to delete todo", err))?;
    if !removed {
        return Err(TodoError::NotFound);
    }
    Ok("Todo deleted successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;
    use std::sync::Arc;

    async fn test_state() -> AppState {
        AppState {
            db: test_pool().await,
            jwt_secret: Arc::from("test-secret"),
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn create_then_list_returns_the_item() {
        let state = test_state().await;

        let created = create_todo(
            State(state.clone()),
            Json(TodoBody {
                todo: "buy milk".to_owned(),
            }),
        )
        .await
        .unwrap()
        .0;
        assert!(!created.id.is_empty());

        let listed = list_todos(State(state.clone())).await.unwrap().0;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].todo, "buy milk");
    }

    #[tokio::test]
    async fn updating_nonexistent_id_is_404_and_mutates_nothing() {
        let state = test_state().await;
        let created = create_todo(
            State(state.clone()),
            Json(TodoBody {
                todo: "keep me".to_owned(),
            }),
        )
        .await
        .unwrap()
        .0;

        let missing_id = Uuid::new_v4().to_string();
        let response = update_todo(
            State(state.clone()),
            Path(missing_id),
            Json(TodoBody {
                todo: "changed".to_owned(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Todo not found");

        let listed = list_todos(State(state.clone())).await.unwrap().0;
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].todo, "keep me");
    }

    #[tokio::test]
    async fn update_replaces_text_on_match() {
        let state = test_state().await;
        let created = create_todo(
            State(state.clone()),
            Json(TodoBody {
                todo: "old".to_owned(),
            }),
        )
        .await
        .unwrap()
        .0;

        let updated = update_todo(
            State(state.clone()),
            Path(created.id.clone()),
            Json(TodoBody {
                todo: "new".to_owned(),
            }),
        )
        .await
        .unwrap()
        .0;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.todo, "new");
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_is_404() {
        let state = test_state().await;
        let created = create_todo(
            State(state.clone()),
            Json(TodoBody {
                todo: "gone soon".to_owned(),
            }),
        )
        .await
        .unwrap()
        .0;

        let response = delete_todo(State(state.clone()), Path(created.id.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Todo deleted successfully");

        assert!(list_todos(State(state.clone())).await.unwrap().0.is_empty());

        let again = delete_todo(State(state.clone()), Path(created.id))
            .await
            .into_response();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_id_is_a_500() {
        let state = test_state().await;
        let response = update_todo(
            State(state.clone()),
            Path("not-a-uuid".to_owned()),
            Json(TodoBody {
                todo: "x".to_owned(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Failed to update todo");
    }
}
