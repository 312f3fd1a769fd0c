//! Integration tests for API endpoints.
//!
//! These tests drive the router with the in-memory store, so no DynamoDB
//! connection is required.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::AppError;
use domain::User;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use user_service_lib::repository::{InMemoryUserStore, MockUserRepository, UserRepository};
use user_service_lib::service::UserManager;

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(repo: Arc<dyn UserRepository>) -> Router {
    let service = Arc::new(UserManager::new(repo.clone()));
    create_router(AppState::new(service, repo))
}

fn app() -> (Arc<InMemoryUserStore>, Router) {
    let store = Arc::new(InMemoryUserStore::new());
    let app = app_with(store.clone());
    (store, app)
}

async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

const USER_A: &str = r#"{"email":"a@b.com","firstName":"A","lastName":"B"}"#;

// =============================================================================
// POST
// =============================================================================

#[tokio::test]
async fn test_create_returns_submitted_object() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "POST", "/users", USER_A).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"email": "a@b.com", "firstName": "A", "lastName": "B"}));
}

#[tokio::test]
async fn test_second_identical_create_is_rejected() {
    let (store, app) = app();

    send(&app, "POST", "/users", USER_A).await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/users",
        r#"{"email":"a@b.com","firstName":"Other"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "User already exists"}));
    let stored = store.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(stored.first_name, "A");
}

#[tokio::test]
async fn test_create_with_invalid_email() {
    let (store, app) = app();

    let (status, body) =
        send_json(&app, "POST", "/users", r#"{"email":"nobody","firstName":"N"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email");
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_create_with_malformed_body() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "POST", "/users", "{oops").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user data");
}

// =============================================================================
// PUT
// =============================================================================

#[tokio::test]
async fn test_update_of_unknown_user() {
    let (store, app) = app();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/users",
        r#"{"email":"nope@x.com","firstName":"X"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("User does not exist"));
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_update_replaces_record() {
    let (_, app) = app();
    send(&app, "POST", "/users", USER_A).await;

    let (status, body) = send_json(
        &app,
        "PUT",
        "/users",
        r#"{"email":"a@b.com","firstName":"New"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"email": "a@b.com", "firstName": "New", "lastName": ""}));

    let (_, body) = send_json(&app, "GET", "/users?email=a@b.com", "").await;
    assert_eq!(body["lastName"], "");
}

#[tokio::test]
async fn test_update_with_malformed_body_is_not_invalid_email() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "PUT", "/users", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user data");
}

// =============================================================================
// GET
// =============================================================================

#[tokio::test]
async fn test_get_without_query_returns_array() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "GET", "/users", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_all_after_creates() {
    let (_, app) = app();
    for email in ["one@example.com", "two@example.com", "three@example.com"] {
        let body = format!(r#"{{"email":"{}"}}"#, email);
        send(&app, "POST", "/users", &body).await;
    }

    let (status, body) = send_json(&app, "GET", "/users", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_single_user() {
    let (_, app) = app();
    send(&app, "POST", "/users", USER_A).await;

    let (status, body) = send_json(&app, "GET", "/users?email=a@b.com", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"email": "a@b.com", "firstName": "A", "lastName": "B"}));
}

#[tokio::test]
async fn test_get_unknown_user_returns_empty_record() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "GET", "/users?email=ghost@example.com", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"email": "", "firstName": "", "lastName": ""}));
}

#[tokio::test]
async fn test_get_with_empty_email_lists_all() {
    let (_, app) = app();
    send(&app, "POST", "/users", USER_A).await;

    let (_, body) = send_json(&app, "GET", "/users?email=", "").await;

    assert!(body.is_array());
}

#[tokio::test]
async fn test_get_with_repeated_email_keeps_json_shape() {
    let (_, app) = app();
    send(&app, "POST", "/users", USER_A).await;

    let (status, body) =
        send_json(&app, "GET", "/users?email=ghost@example.com&email=a@b.com", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@b.com");
}

#[tokio::test]
async fn test_get_fetch_failure_is_bad_request() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .returning(|| Err(AppError::fetch("ResourceNotFoundException")));
    let app = app_with(Arc::new(repo));

    let (status, body) = send_json(&app, "GET", "/users", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Failed to fetch record"}));
}

// =============================================================================
// DELETE
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_returns_empty() {
    let (store, app) = app();
    send(&app, "POST", "/users", USER_A).await;

    let (status, body) = send(&app, "DELETE", "/users?email=a@b.com", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(store.count().await, 0);

    let (_, body) = send_json(&app, "GET", "/users?email=a@b.com", "").await;
    assert_eq!(body["email"], "");
}

#[tokio::test]
async fn test_delete_of_unknown_user_is_accepted() {
    let (_, app) = app();

    let (status, _) = send(&app, "DELETE", "/users?email=ghost@example.com", "").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_with_repeated_email() {
    let (store, app) = app();
    send(&app, "POST", "/users", USER_A).await;

    let (status, _) = send(&app, "DELETE", "/users?email=x@y.com&email=a@b.com", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_delete_without_email() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "DELETE", "/users", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Could not delete record");
}

// =============================================================================
// Other methods
// =============================================================================

#[tokio::test]
async fn test_patch_is_unhandled() {
    let (store, app) = app();

    let (status, body) = send_json(&app, "PATCH", "/users?email=a@b.com", USER_A).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "method not allowed"}));
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_unhandled_method_does_not_touch_storage() {
    // a mock with no expectations panics on any call
    let app = app_with(Arc::new(MockUserRepository::new()));

    let (status, _) = send(&app, "OPTIONS", "/users", "").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_head_is_unhandled_and_does_not_scan() {
    // GET would otherwise answer HEAD with a full scan
    let app = app_with(Arc::new(MockUserRepository::new()));

    let (status, _) = send(&app, "HEAD", "/users", "").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_with_reachable_storage() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "GET", "/health", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_with_unreachable_storage() {
    let mut repo = MockUserRepository::new();
    repo.expect_ping()
        .returning(|| Err(AppError::fetch("connection refused")));
    let app = app_with(Arc::new(repo));

    let (status, body) = send_json(&app, "GET", "/health", "").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["storage"]["error"], "Failed to fetch record");
}

#[tokio::test]
async fn test_openapi_document_lists_users_path() {
    let (_, app) = app();

    let (status, body) = send_json(&app, "GET", "/api-docs/openapi.json", "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users"].is_object());
}

#[tokio::test]
async fn test_router_serves_lambda_requests() {
    let (store, app) = app();

    let request = lambda_http::http::Request::builder()
        .method("POST")
        .uri("/users")
        .body(lambda_http::Body::from(USER_A))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(store.count().await, 1);
}

#[test]
fn test_user_wire_format() {
    let user = User::new("a@b.com", "A", "B");
    assert_eq!(serde_json::to_string(&user).unwrap(), USER_A);
}
