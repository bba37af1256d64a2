//! CORS headers middleware
//!
//! Adds a fixed, permissive set of CORS headers to every response and answers
//! `OPTIONS` requests (preflights) itself with an empty 200, without calling
//! the inner service.
//!
//! # Headers Applied
//!
//! - `Access-Control-Allow-Origin: *`
//! - `Access-Control-Allow-Methods: POST, GET, OPTIONS, PUT, DELETE`
//! - `Access-Control-Allow-Headers: Content-Type`
//!
//! `tower_http::cors::CorsLayer` only short-circuits requests that carry
//! `Access-Control-Request-Method`; this layer treats every `OPTIONS` request
//! as a preflight.
//!
//! # Example
//!
//! ```no_run
//! use axum::Router;
//! use roster_api::middleware::cors::CorsHeadersLayer;
//!
//! let app: Router = Router::new().layer(CorsHeadersLayer::new());
//! ```

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Value of `Access-Control-Allow-Origin`
pub const ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Methods`
pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";

/// Value of `Access-Control-Allow-Headers`
pub const ALLOW_HEADERS: &str = "Content-Type";

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

/// CORS headers middleware layer
#[derive(Debug, Clone, Default)]
pub struct CorsHeadersLayer;

impl CorsHeadersLayer {
    /// Creates a new CORS headers layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for CorsHeadersLayer {
    type Service = CorsHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsHeaders { inner }
    }
}

/// CORS headers middleware service
#[derive(Debug, Clone)]
pub struct CorsHeaders<S> {
    inner: S,
}

impl<S> Service<Request> for CorsHeaders<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        if request.method() == Method::OPTIONS {
            tracing::debug!(path = %request.uri().path(), "Answering CORS preflight");

            let mut response = StatusCode::OK.into_response();
            apply_cors_headers(response.headers_mut());
            return Box::pin(async move { Ok(response) });
        }

        let future = self.inner.call(request);

        Box::pin(async move {
            let mut response = future.await?;
            apply_cors_headers(response.headers_mut());
            Ok(response)
        })
    }
}
