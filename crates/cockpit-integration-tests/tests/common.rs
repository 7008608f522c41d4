//! Common test utilities for integration tests

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use cockpit_api::server::build_router;
use cockpit_api::{ApiConfig, AppState};

/// Router over the seeded fixtures with latency simulation off.
#[allow(dead_code)]
pub fn test_app() -> Router {
    test_app_with(ApiConfig {
        simulate_latency: false,
        ..ApiConfig::default()
    })
}

#[allow(dead_code)]
pub fn test_app_with(config: ApiConfig) -> Router {
    build_router(AppState::seeded(config))
}

/// One-shot a GET and return (status, parsed JSON body).
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    split_json(response).await
}

/// One-shot a JSON POST and return (status, parsed JSON body).
#[allow(dead_code)]
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    split_json(response).await
}

#[allow(dead_code)]
pub async fn split_json(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// One-shot a GET and return (status, raw body text).
#[allow(dead_code)]
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
