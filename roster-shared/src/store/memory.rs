//! In-memory user store
//!
//! Mirrors the PostgreSQL store's contract over a `BTreeMap`: ids come from a
//! counter that starts at 1 and never reuses a value, and `list` returns rows
//! in ascending id order. Handy for exercising the HTTP layer without a
//! database.

use super::{StoreError, StoreResult, UserStore};
use crate::models::user::{User, UserInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, User>,
    last_id: i32,
}

/// User store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    table: RwLock<Table>,
}

impl MemoryUserStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store holds no rows
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<User> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, input: &UserInput) -> StoreResult<User> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let user = User::from_input(table.last_id, input.clone());
        table.rows.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update_by_id(&self, id: i32, input: &UserInput) -> StoreResult<()> {
        // Matches `UPDATE ... WHERE id = $3`: zero matched rows is not an error
        if let Some(user) = self.table.write().await.rows.get_mut(&id) {
            user.name = input.name.clone();
            user.email = input.email.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
