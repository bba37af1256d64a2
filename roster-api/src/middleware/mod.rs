//! Middleware for the API server
//!
//! Both decorators run on every request, ahead of routing:
//!
//! - `cors`: CORS response headers and the `OPTIONS` short-circuit
//! - `content_type`: `Content-Type: application/json` on every response
//!
//! `cors` must wrap `content_type` so that preflight requests never reach the
//! inner layer.

pub mod content_type;
pub mod cors;
