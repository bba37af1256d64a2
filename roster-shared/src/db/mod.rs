//! Database layer for Roster
//!
//! This module provides database connection pooling and schema bootstrap.
//!
//! # Modules
//!
//! - `pool`: PostgreSQL connection pool management with health checks
//! - `schema`: Idempotent creation of the `users` table
//!
//! # Example
//!
//! ```no_run
//! use roster_shared::db::{pool::{create_pool, DatabaseConfig}, schema::ensure_schema};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..Default::default()
//!     };
//!
//!     let pool = create_pool(config).await?;
//!     ensure_schema(&pool).await?;
//!     Ok(())
//! }
//! ```

pub mod pool;
pub mod schema;
