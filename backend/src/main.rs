//! Main entry point for the todo backend.
//!
//! This file initializes the Axum web server, sets up the database connection,
//! and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use config::Config;

/// Shared per-request state: the connection pool and the token-signing secret.
///
/// Constructed once at startup and injected through axum state; nothing else
/// is shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: Arc<str>,
}

/// Builds the full application router: auth routes, todo routes, and a
/// permissive CORS layer for browser clients.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(auth::routes::auth_router())
        .merge(api::todo::routes::todo_router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=info".into()),
        )
        .init();

    let config = Config::from_env();

    let db = match database::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("failed to open database {}: {err}", config.database_url);
            std::process::exit(1);
        }
    };

    let state = AppState {
        db: db.clone(),
        jwt_secret: Arc::from(config.jwt_secret.as_str()),
    };
    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!("listening on {addr}");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {err}");
    }

    db.close().await;
}
