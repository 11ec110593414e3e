//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for API domains other than
//! authentication, which is handled separately.

pub mod todo;
