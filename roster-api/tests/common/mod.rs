//! Common test utilities for integration tests
//!
//! Builds the full router over an in-memory user store (or a store that
//! always fails) and provides helpers for sending requests to it.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use roster_api::app::{build_router, AppState};
use roster_shared::models::user::{User, UserInput};
use roster_shared::store::{MemoryUserStore, StoreError, StoreResult, UserStore};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::Service as _;

/// Response pieces the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parses the body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Expected JSON body, got {:?}: {}",
                String::from_utf8_lossy(&self.body),
                e
            )
        })
    }

    /// Parses the body as a user
    pub fn user(&self) -> User {
        serde_json::from_slice(&self.body).expect("Expected a user object")
    }
}

/// Test context wrapping a router and the store behind it
pub struct TestContext<S> {
    pub store: Arc<S>,
    pub app: axum::Router,
}

impl TestContext<MemoryUserStore> {
    /// Creates a context over an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(MemoryUserStore::new())
    }
}

impl<S: UserStore + 'static> TestContext<S> {
    /// Creates a context over the given store
    pub fn with_store(store: S) -> Self {
        let store = Arc::new(store);
        let app = build_router(AppState::new(store.clone()));
        Self { store, app }
    }

    /// Sends a request with an optional raw body
    pub async fn send_raw(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.app.clone().call(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Sends a request with an optional JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let body = body.map(|b| b.to_string());
        self.send_raw(method, uri, body.as_deref()).await
    }

    /// Creates a user through the API and returns it
    pub async fn create_user(&self, name: &str, email: &str) -> User {
        let response = self
            .send(
                Method::POST,
                "/api/go/users",
                Some(serde_json::json!({ "name": name, "email": email })),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        response.user()
    }
}

/// Store whose every call fails as if the database connection dropped
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn list(&self) -> StoreResult<Vec<User>> {
        self.fail()
    }

    async fn get_by_id(&self, _id: i32) -> StoreResult<User> {
        self.fail()
    }

    async fn insert(&self, _input: &UserInput) -> StoreResult<User> {
        self.fail()
    }

    async fn update_by_id(&self, _id: i32, _input: &UserInput) -> StoreResult<()> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: i32) -> StoreResult<()> {
        self.fail()
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.fail()
    }
}
