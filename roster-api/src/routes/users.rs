//! User resource endpoints
//!
//! Each handler decodes the request, makes one call into the user store (two
//! for update), and encodes the result as JSON.
//!
//! # Endpoints
//!
//! - `GET    /api/go/users` - List users
//! - `POST   /api/go/users` - Create user
//! - `GET    /api/go/users/:id` - Get user
//! - `PUT    /api/go/users/:id` - Update user
//! - `DELETE /api/go/users/:id` - Delete user
//!
//! Successful calls answer 200, including create. Missing rows answer 404,
//! bad input 400 and store failures 500.

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{JsonBody, UserId},
};
use axum::{extract::State, Json};
use roster_shared::models::user::{User, UserInput};
use tracing::info;

/// Body returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "User deleted successfully";

/// List users
///
/// # Endpoint
///
/// ```text
/// GET /api/go/users
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "name": "Ada", "email": "ada@example.com" }
/// ]
/// ```
///
/// An empty table yields `[]`.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

/// Get user by id
///
/// # Errors
///
/// - `400 Bad Request`: `id` is not an integer
/// - `404 Not Found`: No user with this id
/// - `500 Internal Server Error`: Store failure
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> ApiResult<Json<User>> {
    let user = state.store.get_by_id(id).await?;
    Ok(Json(user))
}

/// Create user
///
/// Any `id` in the body is ignored; the store assigns one.
///
/// # Endpoint
///
/// ```text
/// POST /api/go/users
///
/// { "name": "Ada", "email": "ada@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "name": "Ada", "email": "ada@example.com" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body is not valid JSON for a user
/// - `500 Internal Server Error`: Store failure
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UserInput>,
) -> ApiResult<Json<User>> {
    let user = state.store.insert(&input).await?;

    info!(user_id = user.id, "Created user");
    Ok(Json(user))
}

/// Update user by id
///
/// Overwrites both `name` and `email`, then answers with the row as re-read
/// from the store rather than the submitted body.
///
/// # Errors
///
/// - `400 Bad Request`: Bad id or body
/// - `404 Not Found`: No user with this id
/// - `500 Internal Server Error`: Store failure
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(input): JsonBody<UserInput>,
) -> ApiResult<Json<User>> {
    state.store.update_by_id(id, &input).await?;

    let updated = state.store.get_by_id(id).await?;

    info!(user_id = id, "Updated user");
    Ok(Json(updated))
}

/// Delete user by id
///
/// # Response
///
/// ```json
/// "User deleted successfully"
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: `id` is not an integer
/// - `404 Not Found`: No user with this id
/// - `500 Internal Server Error`: Store failure
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> ApiResult<Json<&'static str>> {
    state.store.delete_by_id(id).await?;

    info!(user_id = id, "Deleted user");
    Ok(Json(DELETE_CONFIRMATION))
}
