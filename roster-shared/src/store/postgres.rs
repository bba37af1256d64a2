//! PostgreSQL user store
//!
//! Every statement names its columns explicitly and passes values as
//! positional bind parameters. Text columns are nullable in the schema, so
//! reads coalesce `NULL` to the empty string.
//!
//! # Example
//!
//! ```no_run
//! use roster_shared::db::pool::{create_pool, DatabaseConfig};
//! use roster_shared::models::user::UserInput;
//! use roster_shared::store::{PgUserStore, UserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig {
//!     url: std::env::var("DATABASE_URL")?,
//!     ..Default::default()
//! })
//! .await?;
//!
//! let store = PgUserStore::new(pool);
//! let user = store
//!     .insert(&UserInput { name: "Ada".into(), email: "ada@example.com".into() })
//!     .await?;
//! println!("Created user {}", user.id);
//! # Ok(())
//! # }
//! ```

use super::{StoreError, StoreResult, UserStore};
use crate::models::user::{User, UserInput};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// User store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Wraps an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, COALESCE(name, '') AS name, COALESCE(email, '') AS email
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, COALESCE(name, '') AS name, COALESCE(email, '') AS email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, input: &UserInput) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, COALESCE(name, '') AS name, COALESCE(email, '') AS email
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .fetch_one(&self.pool)
        .await?;

        debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn update_by_id(&self, id: i32, input: &UserInput) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $1, email = $2
            WHERE id = $3
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(id)
        .execute(&self.pool)
        .await?;

        debug!(user_id = id, rows_affected = result.rows_affected(), "Updated user");
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        debug!(user_id = id, "Deleted user");
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::db::pool::health_check(&self.pool).await?;
        Ok(())
    }
}
