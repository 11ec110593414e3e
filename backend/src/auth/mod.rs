//! Authentication module for managing user accounts and token issuance.
//!
//! This module provides the public interface for signup and login: password
//! hashing, credential verification, and JWT issuance. Tokens are issued on
//! login but not enforced on any other route.

pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use models::*;
