//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the SQLite connection pool and
//! creating the schema on startup. There is no migration tooling; the two
//! tables are created idempotently every time the service boots.

pub mod models;
pub mod queries;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

const CREATE_TODOS: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id TEXT PRIMARY KEY,
    todo TEXT NOT NULL
)";

/// Opens the connection pool and ensures the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_TODOS).execute(pool).await?;
    Ok(())
}

/// In-memory pool for tests. A single connection, otherwise each checkout
/// would see its own empty database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    init_schema(&pool).await.expect("schema");
    pool
}
