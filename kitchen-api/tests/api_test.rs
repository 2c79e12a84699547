//! End-to-end tests for the Kitchen HTTP API.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`,
//! no network listener involved.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use kitchen_api::api::create_router;
use kitchen_api::config::Config;
use kitchen_api::state::AppState;
use kitchen_core::repository::InMemoryRepository;
use serde_json::{Value, json};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Router with the default startup seed
fn test_app() -> Router {
    create_router(AppState::new(&Config::default()))
}

/// Router over an empty repository
fn empty_app() -> Router {
    create_router(AppState::with_repository(Arc::new(InMemoryRepository::<Value>::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_raw(app: &Router, path: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn post_bytes(app: &Router, path: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// A valid JSON string document of roughly `len` bytes
fn large_json_string(len: usize) -> Vec<u8> {
    format!("\"{}\"", "a".repeat(len)).into_bytes()
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_order_returns_seed() {
    let app = test_app();

    let (status, body) = get_json(&app, "/api/order").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("bar"));
}

#[tokio::test]
async fn test_post_order_then_get() {
    let app = test_app();

    let (status, body) = post_json(&app, "/api/order", json!({"item": "cake"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));

    let (status, body) = get_json(&app, "/api/order").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"item": "cake"}));
}

#[tokio::test]
async fn test_get_returns_last_of_many() {
    let app = test_app();

    post_json(&app, "/api/order", json!(1)).await;
    post_json(&app, "/api/order", json!(2)).await;

    let (_, body) = get_json(&app, "/api/order").await;
    assert_eq!(body, json!(2));
}

#[tokio::test]
async fn test_post_null_order_is_false() {
    let app = test_app();

    let (status, body) = post_raw(&app, "/api/order", "null").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));

    // Rejected order leaves the seed in place
    let (_, body) = get_json(&app, "/api/order").await;
    assert_eq!(body, json!("bar"));
}

#[tokio::test]
async fn test_post_absent_body_is_false() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/order")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));
}

#[tokio::test]
async fn test_post_malformed_body_is_false() {
    let app = test_app();

    let (status, body) = post_raw(&app, "/api/order", "{\"item\": ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));
}

#[tokio::test]
async fn test_post_large_order_is_accepted() {
    let app = test_app();

    let (status, body) = post_bytes(&app, "/api/order", large_json_string(3 * 1024 * 1024)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));

    let (_, body) = get_json(&app, "/api/order").await;
    assert_eq!(body.as_str().map(str::len), Some(3 * 1024 * 1024));
}

#[tokio::test]
async fn test_post_order_over_limit_is_false() {
    let app = test_app();

    let oversized = large_json_string(kitchen_api::api::MAX_ORDER_BODY_BYTES + 1);
    let (status, body) = post_bytes(&app, "/api/order", oversized).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));

    let (_, body) = get_json(&app, "/api/order").await;
    assert_eq!(body, json!("bar"));
}

#[tokio::test]
async fn test_get_order_on_empty_repository() {
    let app = empty_app();

    let (status, body) = get_json(&app, "/api/order").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No orders have been placed");
}

#[tokio::test]
async fn test_null_on_empty_repository_keeps_it_empty() {
    let app = empty_app();

    let (_, body) = post_raw(&app, "/api/order", "null").await;
    assert_eq!(body, json!(false));

    let (status, _) = get_json(&app, "/api/order").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seeding_disabled() {
    let config = Config::default().with_seed_order(None);
    let app = create_router(AppState::new(&config));

    let (status, _) = get_json(&app, "/api/order").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_posts() {
    let repository: Arc<InMemoryRepository<Value>> = Arc::new(InMemoryRepository::new());
    let app = create_router(AppState::with_repository(repository.clone()));

    let mut handles = Vec::new();
    for i in 0..50 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            post_json(&app, "/api/order", json!({ "n": i })).await
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(true));
    }

    assert_eq!(repository.len(), 50);
}

// ---------------------------------------------------------------------------
// Catalog and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_cupcakes() {
    let app = test_app();

    let (status, body) = get_json(&app, "/api/cupcakes").await;

    assert_eq!(status, StatusCode::OK);
    let cupcakes = body.as_array().unwrap();
    assert_eq!(cupcakes.len(), 6);
    assert_eq!(cupcakes[0]["name"], "Chocolate");
}

#[tokio::test]
async fn test_get_cupcake() {
    let app = test_app();

    let (status, body) = get_json(&app, "/api/cupcakes/6").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Unicorn");
    assert_eq!(body["price"], json!(999.99));
}

#[tokio::test]
async fn test_get_unknown_cupcake() {
    let app = test_app();

    let (status, body) = get_json(&app, "/api/cupcakes/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Cupcake 99 not found");
}

#[tokio::test]
async fn test_cupcakes_are_not_orders() {
    let app = test_app();

    get_json(&app, "/api/cupcakes").await;

    let (_, body) = get_json(&app, "/api/order").await;
    assert_eq!(body, json!("bar"));
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
