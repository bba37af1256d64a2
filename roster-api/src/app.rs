//! Application state and router builder
//!
//! The user store is injected through [`AppState`] rather than held in a
//! global, so tests can swap PostgreSQL for an in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use roster_api::app::{build_router, AppState};
//! use roster_shared::store::PgUserStore;
//! use sqlx::PgPool;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = PgPool::connect(&std::env::var("DATABASE_URL")?).await?;
//! let state = AppState::new(Arc::new(PgUserStore::new(pool)));
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

use crate::middleware::{content_type::JsonContentTypeLayer, cors::CorsHeadersLayer};
use axum::{routing::get, Router};
use roster_shared::store::UserStore;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// User persistence gateway
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET /health
/// └── /api/go/users
///     ├── GET    /          # List users
///     ├── POST   /          # Create user
///     ├── GET    /:id       # Get user
///     ├── PUT    /:id       # Update user
///     └── DELETE /:id       # Delete user
/// ```
///
/// # Middleware Stack
///
/// Outermost first:
/// 1. Request tracing (tower-http TraceLayer)
/// 2. CORS headers, answering every `OPTIONS` request directly
/// 3. `Content-Type: application/json`
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let user_routes = Router::new()
        .route(
            "/",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/:id",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user),
        );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api/go/users", user_routes)
        .layer(JsonContentTypeLayer::new())
        .layer(CorsHeadersLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
