//! API route handlers
//!
//! - `health`: Health check endpoint
//! - `users`: CRUD endpoints for the user resource

pub mod health;
pub mod users;
