//! # Server Smoke Tests
//!
//! Checks the informational routes and the permissive CORS policy the browser
//! front end relies on.

mod common;

use crate::common::TestApp;

#[tokio::test]
async fn test_root_and_health() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");

    let root = app.client.get(&app.address).send().await.unwrap();
    assert_eq!(root.status(), 200);
    assert_eq!(root.text().await.unwrap(), "sermon-meta server is running.");

    let health = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), 200);
    assert_eq!(health.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");

    let response = app
        .client
        .request(reqwest::Method::OPTIONS, app.generate_url())
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_app_state_uses_configured_model() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");
    assert_eq!(app.app_state.config.provider.model, "mock-chat-model");
    assert_eq!(app.app_state.config.provider.max_tokens, 1500);
}
