//! Integration tests for the user endpoints
//!
//! These drive the full router (middleware included) against an in-memory
//! store, so they need no database.

mod common;

use axum::http::{header, Method, StatusCode};
use common::{FailingStore, TestContext};
use roster_shared::store::UserStore;
use serde_json::json;

#[tokio::test]
async fn test_list_empty_is_array() {
    let ctx = TestContext::new();

    let response = ctx.send(Method::GET, "/api/go/users", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let ctx = TestContext::new();

    let created = ctx.create_user("A", "a@x.com").await;
    assert!(created.id > 0);
    assert_eq!(created.name, "A");
    assert_eq!(created.email, "a@x.com");

    let response = ctx
        .send(Method::GET, &format!("/api/go/users/{}", created.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "id": created.id, "name": "A", "email": "a@x.com" })
    );
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let ctx = TestContext::new();

    let response = ctx
        .send(
            Method::POST,
            "/api/go/users",
            Some(json!({ "id": 500, "name": "A", "email": "a@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let user = response.user();
    assert_ne!(user.id, 500);
    assert!(ctx.store.get_by_id(500).await.is_err());
}

#[tokio::test]
async fn test_create_with_missing_fields_stores_empty_strings() {
    let ctx = TestContext::new();

    let response = ctx
        .send(Method::POST, "/api/go/users", Some(json!({ "name": "only" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let user = response.user();
    assert_eq!(user.name, "only");
    assert_eq!(user.email, "");
}

#[tokio::test]
async fn test_list_contains_every_created_user() {
    let ctx = TestContext::new();

    let mut ids = Vec::new();
    for i in 0..4 {
        let user = ctx
            .create_user(&format!("user{i}"), &format!("user{i}@x.com"))
            .await;
        ids.push(user.id);
    }

    let response = ctx.send(Method::GET, "/api/go/users", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let listed = response.json();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), ids.len());

    for id in ids {
        assert!(listed.iter().any(|u| u["id"] == json!(id)), "missing user {id}");
    }
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let ctx = TestContext::new();
    ctx.create_user("A", "a@x.com").await;

    let response = ctx.send(Method::GET, "/api/go/users/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "not_found");
}

#[tokio::test]
async fn test_delete_unknown_id_is_404_and_changes_nothing() {
    let ctx = TestContext::new();
    let user = ctx.create_user("A", "a@x.com").await;

    let response = ctx.send(Method::DELETE, "/api/go/users/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(ctx.store.len().await, 1);
    assert_eq!(ctx.store.get_by_id(user.id).await.unwrap(), user);
}

#[tokio::test]
async fn test_update_response_matches_stored_row() {
    let ctx = TestContext::new();
    let user = ctx.create_user("A", "a@x.com").await;
    let uri = format!("/api/go/users/{}", user.id);

    let response = ctx
        .send(
            Method::PUT,
            &uri,
            Some(json!({ "id": 12345, "name": "B", "email": "b@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let expected = json!({ "id": user.id, "name": "B", "email": "b@x.com" });
    assert_eq!(response.json(), expected);

    let fetched = ctx.send(Method::GET, &uri, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), expected);
}

#[tokio::test]
async fn test_update_overwrites_both_fields() {
    let ctx = TestContext::new();
    let user = ctx.create_user("A", "a@x.com").await;

    let response = ctx
        .send(
            Method::PUT,
            &format!("/api/go/users/{}", user.id),
            Some(json!({ "name": "B" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = response.user();
    assert_eq!(updated.name, "B");
    assert_eq!(updated.email, "");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let ctx = TestContext::new();

    let response = ctx
        .send(
            Method::PUT,
            "/api/go/users/77",
            Some(json!({ "name": "B", "email": "b@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let ctx = TestContext::new();
    let user = ctx.create_user("A", "a@x.com").await;
    let uri = format!("/api/go/users/{}", user.id);

    let response = ctx.send(Method::DELETE, &uri, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!("User deleted successfully"));

    let response = ctx.send(Method::GET, &uri, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let ctx = TestContext::new();

    let response = ctx
        .send_raw(Method::POST, "/api/go/users", Some("{\"name\": "))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "bad_request");
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_update_body_is_400_and_row_unchanged() {
    let ctx = TestContext::new();
    let user = ctx.create_user("A", "a@x.com").await;

    let response = ctx
        .send_raw(
            Method::PUT,
            &format!("/api/go/users/{}", user.id),
            Some("not json"),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(ctx.store.get_by_id(user.id).await.unwrap(), user);
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let ctx = TestContext::new();

    let response = ctx.send(Method::GET, "/api/go/users/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "bad_request");
}

#[tokio::test]
async fn test_store_failure_is_500_and_server_keeps_serving() {
    let ctx = TestContext::with_store(FailingStore::default());

    let response = ctx.send(Method::GET, "/api/go/users", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["error"], "internal_error");

    let response = ctx
        .send(
            Method::POST,
            "/api/go/users",
            Some(json!({ "name": "A", "email": "a@x.com" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let response = ctx.send(Method::DELETE, "/api/go/users/1", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(ctx.store.call_count(), 3);
}

#[tokio::test]
async fn test_error_responses_carry_cors_and_json_headers() {
    let ctx = TestContext::new();

    let response = ctx.send(Method::GET, "/api/go/users/404", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert_eq!(
        response.headers.get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let ctx = TestContext::new();
    let response = ctx.send(Method::GET, "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
    assert_eq!(response.json()["database"], "connected");

    let ctx = TestContext::with_store(FailingStore::default());
    let response = ctx.send(Method::GET, "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "degraded");
    assert_eq!(response.json()["database"], "disconnected");
}
