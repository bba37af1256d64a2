//! # Roster Shared Library
//!
//! Types and persistence code used by the Roster API server.
//!
//! ## Module Organization
//!
//! - `models`: The `User` resource and its request payload
//! - `store`: The `UserStore` persistence gateway (PostgreSQL and in-memory)
//! - `db`: Connection pool management and schema bootstrap

pub mod db;
pub mod models;
pub mod store;

/// Current version of the Roster shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
