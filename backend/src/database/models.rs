//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. `Todo` doubles as the API response shape; `User` never
//! leaves the server (it carries the password hash).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user. `password` holds the bcrypt hash, never plaintext.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A todo item. Global, with no ownership link to a user.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub todo: String,
}
