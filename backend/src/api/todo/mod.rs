//! Module for the todo CRUD API.
//!
//! This module defines the public interface and structure for creating,
//! listing, updating, and deleting todo items through HTTP endpoints.

pub mod handlers;
pub mod routes;
