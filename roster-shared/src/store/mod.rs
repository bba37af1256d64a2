//! Persistence gateway for the user resource
//!
//! `UserStore` is the boundary between the HTTP handlers and the database.
//! Every operation returns a tagged outcome: success, [`StoreError::NotFound`]
//! when no row matched, or [`StoreError::Database`] when the store itself
//! failed. Handlers map those to HTTP statuses; nothing here terminates the
//! process.
//!
//! # Implementations
//!
//! - [`PgUserStore`]: PostgreSQL via sqlx, used by the server
//! - [`MemoryUserStore`]: in-process table, used as a substitute in tests
//!
//! # Example
//!
//! ```
//! use roster_shared::models::user::UserInput;
//! use roster_shared::store::{MemoryUserStore, StoreError, UserStore};
//!
//! # async fn example() -> Result<(), StoreError> {
//! let store = MemoryUserStore::new();
//! let user = store
//!     .insert(&UserInput { name: "Ada".into(), email: "ada@example.com".into() })
//!     .await?;
//!
//! assert_eq!(store.get_by_id(user.id).await?, user);
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use crate::models::user::{User, UserInput};
use async_trait::async_trait;

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched the given id
    #[error("User not found")]
    NotFound,

    /// The underlying store failed (connection loss, bad query, constraint)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations on the `users` table
///
/// Implementations hold no state beyond their connection handle and must be
/// safe to share across request tasks.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns every user in store-defined order
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Fetches one user
    ///
    /// Returns [`StoreError::NotFound`] if no row has this id.
    async fn get_by_id(&self, id: i32) -> StoreResult<User>;

    /// Inserts a user and returns it with the id the store assigned
    async fn insert(&self, input: &UserInput) -> StoreResult<User>;

    /// Overwrites `name` and `email` of the row with this id
    ///
    /// Returns nothing about the row. Callers re-read with
    /// [`UserStore::get_by_id`] to see the persisted state.
    async fn update_by_id(&self, id: i32, input: &UserInput) -> StoreResult<()>;

    /// Deletes the row with this id
    ///
    /// Returns [`StoreError::NotFound`] if there was nothing to delete.
    async fn delete_by_id(&self, id: i32) -> StoreResult<()>;

    /// Checks that the store is reachable
    async fn health_check(&self) -> StoreResult<()>;
}
