//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for signup and login,
//! parse request data, and delegate to `auth::service` and the query layer.

use axum::extract::State;
use axum::Json;

use super::errors::AuthError;
use super::models::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use super::service;
use crate::database::queries;
use crate::AppState;

/// POST /signup — hash the password and persist a new user.
///
/// Every insert failure is reported as a duplicate email; the storage layer's
/// unique index on `email` is the only failure seen in practice.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let hashed = service::hash_password(&body.password)?;
    queries::insert_user(&state.db, &body.name, &body.email, &hashed)
        .await
        .map_err(|err| {
            tracing::debug!("signup insert failed: {err}");
            AuthError::EmailExists
        })?;
    Ok(Json(MessageResponse {
        message: "User created successfully".to_owned(),
    }))
}

/// POST /login — verify credentials and issue a one-hour token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = queries::find_user_by_email(&state.db, &body.email)
        .await
        .map_err(AuthError::internal)?
        .ok_or(AuthError::UserNotFound)?;

    if !service::verify_password(&body.password, &user.password)? {
        return Err(AuthError::InvalidPassword);
    }

    let token = service::issue_token(&user.id, &state.jwt_secret)?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_owned(),
        token,
    }))
}
