#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use wallet_api::config::{ServerConfig, StoreBackend};
use wallet_api::router::build_app_router;
use wallet_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
    }
}

/// Build the full application router over fresh in-memory stores.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    build_app_router(AppState::in_memory(config.clone()), &config)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// GET with the access code sent in the `x-access-code` header.
pub async fn get_with_code(app: &Router, uri: &str, code: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .header("x-access-code", code)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("POST", uri, &body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("PUT", uri, &body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("PATCH", uri, &body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Create an asset and return its id.
pub async fn create_asset(app: &Router, name: &str, category: &str, value: f64) -> i64 {
    let (status, json) = post_json(
        app,
        "/api/v1/assets",
        serde_json::json!({
            "name": name,
            "category": category,
            "current_value": value,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create asset failed: {json}");
    json["id"].as_i64().unwrap()
}

/// Create a customer and return its id.
pub async fn create_customer(app: &Router, name: &str, plan: &str, code: &str) -> i64 {
    let (status, json) = post_json(
        app,
        "/api/v1/customers",
        serde_json::json!({
            "full_name": name,
            "primary_address": "Rua das Flores, 100",
            "plan": plan,
            "access_code": code,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create customer failed: {json}");
    json["id"].as_i64().unwrap()
}
