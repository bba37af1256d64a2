//! JSON content-type middleware
//!
//! Every response produced by the wrapped service is labelled
//! `Content-Type: application/json`, including axum's own 404/405 responses
//! for unmatched routes.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    response::Response,
};
use futures::future::BoxFuture;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// The media type set on every response
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// JSON content-type middleware layer
#[derive(Debug, Clone, Default)]
pub struct JsonContentTypeLayer;

impl JsonContentTypeLayer {
    /// Creates a new content-type layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for JsonContentTypeLayer {
    type Service = JsonContentType<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JsonContentType { inner }
    }
}

/// JSON content-type middleware service
#[derive(Debug, Clone)]
pub struct JsonContentType<S> {
    inner: S,
}

impl<S> Service<Request> for JsonContentType<S>
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
        let future = self.inner.call(request);

        Box::pin(async move {
            let mut response = future.await?;
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            );
            Ok(response)
        })
    }
}
