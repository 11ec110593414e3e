//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations. Each function is a
//! single atomic statement; no transaction spans more than one of them. Ids
//! are uuid v4 strings generated here at insert time.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::models::{Todo, User};

/// Inserts a new user. Fails with a unique-constraint violation if the email
/// is already taken, leaving the table untouched.
pub async fn insert_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO users (id, name, email, password) VALUES (?1, ?2, ?3, ?4)")
        .bind(&id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;
    Ok(User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        password: password_hash.to_owned(),
    })
}

/// Looks up a user by exact email match.
pub async fn find_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email, password FROM users WHERE email = ?1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Inserts a new todo and returns the stored record, generated id included.
pub async fn insert_todo(pool: &SqlitePool, text: &str) -> Result<Todo, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO todos (id, todo) VALUES (?1, ?2)")
        .bind(&id)
        .bind(text)
        .execute(pool)
        .await?;
    Ok(Todo {
        id,
        todo: text.to_owned(),
    })
}

/// Returns every todo in storage order.
pub async fn list_todos(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>("SELECT id, todo FROM todos")
        .fetch_all(pool)
        .await
}

/// Replaces the text of the todo with the given id. Returns `None` when no
/// record matched.
pub async fn update_todo(
    pool: &SqlitePool,
    id: &str,
    text: &str,
) -> Result<Option<Todo>, sqlx::Error> {
    let affected = sqlx::query("UPDATE todos SET todo = ?2 WHERE id = ?1")
        .bind(id)
        .bind(text)
        .execute(pool)
        .await?
        .rows_affected();
    if affected == 0 {
        return Ok(None);
    }
    Ok(Some(Todo {
        id: id.to_owned(),
        todo: text.to_owned(),
    }))
}

/// Deletes the todo with the given id. Returns whether a record matched.
pub async fn delete_todo(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM todos WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(affected > 0)
}
