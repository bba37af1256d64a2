//! Schema bootstrap
//!
//! Creates the `users` table on startup. The statement is guarded with
//! `IF NOT EXISTS`, so running it against a database that already holds the
//! table leaves every existing row in place.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS users (
//!     id SERIAL PRIMARY KEY,
//!     name TEXT,
//!     email TEXT
//! );
//! ```

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// DDL for the users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name TEXT,
    email TEXT
)
"#;

/// Ensures the `users` table exists
///
/// # Errors
///
/// Returns an error if the DDL statement fails (lost connection, missing
/// privileges). Callers treat this as fatal at startup.
///
/// # Example
///
/// ```no_run
/// use roster_shared::db::schema::ensure_schema;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// ensure_schema(&pool).await?;
/// ensure_schema(&pool).await?; // no-op the second time
/// # Ok(())
/// # }
/// ```
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring users table exists");

    match sqlx::query(CREATE_USERS_TABLE).execute(pool).await {
        Ok(_) => {
            info!("Schema ready");
            Ok(())
        }
        Err(e) => {
            warn!("Schema bootstrap failed: {}", e);
            Err(e)
        }
    }
}
