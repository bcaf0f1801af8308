//! Integration tests for the Penilaian HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
// Allow holding MutexGuard across await - tests are serialized
// intentionally to avoid env var conflicts
#![allow(clippy::unwrap_used, clippy::panic, clippy::await_holding_lock)]

use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use penilaian::api::{
    AppState, BatchResponse, HealthResponse, ResolveResponse, TableResponse, create_router,
};
use penilaian::config::ServerConfig;
use penilaian_core::{
    CombinedStatus,
    primitives::{MAX_BATCH_SIZE, MAX_STATUS_LENGTH},
};
use serde_json::json;
use std::sync::Mutex;

/// Mutex to serialize tests since the auth middleware reads env vars.
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Guard wrapper that holds the mutex and ensures cleanup on drop.
struct TestGuard {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl Drop for TestGuard {
    fn drop(&mut self) {
        // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
        unsafe { std::env::remove_var("PENILAIAN_API_KEY") };
    }
}

/// Settings with rate limiting off so request-heavy tests are not throttled.
fn test_settings() -> ServerConfig {
    ServerConfig {
        rate_limit: 0,
        ..ServerConfig::default()
    }
}

/// Create a test server without authentication.
/// Returns a guard that must be kept alive during the test.
fn create_test_server() -> (TestServer, TestGuard) {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::remove_var("PENILAIAN_API_KEY") };
    let router = create_router(AppState::new(test_settings()));
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

/// Create a test server with authentication enabled.
fn create_auth_test_server(api_key: &str) -> (TestServer, TestGuard) {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::set_var("PENILAIAN_API_KEY", api_key) };
    let router = create_router(AppState::new(test_settings()));
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

async fn resolve(server: &TestServer, body: serde_json::Value) -> ResolveResponse {
    let response = server.post("/status/resolve").json(&body).await;
    response.assert_status_ok();
    response.json()
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// TABLE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_statuses_lists_six_in_order() {
    let (server, _guard) = create_test_server();

    let response = server.get("/statuses").await;

    response.assert_status_ok();
    let table: TableResponse = response.json();
    let keys: Vec<CombinedStatus> = table.statuses.iter().map(|s| s.combined_status).collect();
    assert_eq!(keys, CombinedStatus::ALL.to_vec());
}

#[tokio::test]
async fn test_statuses_wire_format_is_camel_case() {
    let (server, _guard) = create_test_server();

    let response = server.get("/statuses").await;
    let body: serde_json::Value = response.json();

    let first = &body["statuses"][0];
    assert_eq!(first["combinedStatus"], "in_progress");
    assert_eq!(first["canEdit"], true);
    assert_eq!(first["canSubmit"], true);
    assert_eq!(first["showProgress"], true);
    assert!(first["bgColor"].is_string());
}

// =============================================================================
// RESOLVE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_resolve_in_progress() {
    let (server, _guard) = create_test_server();

    let result = resolve(&server, json!({"sessionStatus": "in_progress"})).await;

    assert!(result.success);
    assert!(!result.fallback);
    let status = result.status.unwrap();
    assert_eq!(status.combined_status, CombinedStatus::InProgress);
    assert!(status.can_edit);
    assert!(status.can_submit);
}

#[tokio::test]
async fn test_resolve_submitted_without_review() {
    let (server, _guard) = create_test_server();

    let result = resolve(
        &server,
        json!({"sessionStatus": "submitted", "reviewStatus": null}),
    )
    .await;

    let status = result.status.unwrap();
    assert_eq!(status.combined_status, CombinedStatus::Submitted);
    assert!(!status.can_edit);
    assert!(!status.can_submit);
}

#[tokio::test]
async fn test_resolve_needs_revision() {
    let (server, _guard) = create_test_server();

    let result = resolve(
        &server,
        json!({"sessionStatus": "submitted", "reviewStatus": "needs_revision"}),
    )
    .await;

    let status = result.status.unwrap();
    assert_eq!(status.combined_status, CombinedStatus::NeedsRevision);
    assert!(status.can_resubmit);
    assert!(status.show_feedback);
}

#[tokio::test]
async fn test_resolve_resubmitted_ignores_review() {
    let (server, _guard) = create_test_server();

    let result = resolve(
        &server,
        json!({"sessionStatus": "resubmitted", "reviewStatus": "approved"}),
    )
    .await;

    assert_eq!(
        result.status.unwrap().combined_status,
        CombinedStatus::Resubmitted
    );
}

#[tokio::test]
async fn test_resolve_unknown_falls_back() {
    let (server, _guard) = create_test_server();

    let result = resolve(
        &server,
        json!({"sessionStatus": "unknown_bogus_status", "reviewStatus": "completed"}),
    )
    .await;

    assert!(result.success);
    assert!(result.fallback);
    assert_eq!(
        result.status.unwrap().combined_status,
        CombinedStatus::InProgress
    );
}

#[tokio::test]
async fn test_resolve_echoes_review_stage() {
    let (server, _guard) = create_test_server();

    let result = resolve(
        &server,
        json!({
            "sessionStatus": "submitted",
            "reviewStatus": "approved",
            "reviewStage": "juri_scoring"
        }),
    )
    .await;

    assert_eq!(result.review_stage.as_deref(), Some("juri_scoring"));
    assert_eq!(
        result.status.unwrap().combined_status,
        CombinedStatus::Approved
    );
}

#[tokio::test]
async fn test_resolve_overlong_status_falls_back() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/status/resolve")
        .json(&json!({"sessionStatus": "x".repeat(500), "reviewStatus": "r".repeat(500)}))
        .await;

    response.assert_status_ok();
    let body: ResolveResponse = response.json();
    assert!(body.success);
    assert!(body.fallback);
    assert_eq!(
        body.status.unwrap().combined_status,
        CombinedStatus::InProgress
    );
}

#[tokio::test]
async fn test_resolve_truncates_overlong_stage() {
    let (server, _guard) = create_test_server();

    let result = resolve(
        &server,
        json!({
            "sessionStatus": "submitted",
            "reviewStatus": "approved",
            "reviewStage": "s".repeat(MAX_STATUS_LENGTH + 1)
        }),
    )
    .await;

    assert_eq!(result.review_stage.unwrap().len(), MAX_STATUS_LENGTH);
    assert_eq!(
        result.status.unwrap().combined_status,
        CombinedStatus::Approved
    );
}

#[tokio::test]
async fn test_resolve_missing_session_status_is_client_error() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/status/resolve")
        .json(&json!({"reviewStatus": "approved"}))
        .await;

    assert!(response.status_code().is_client_error());
}

// =============================================================================
// BATCH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_batch_resolves_and_summarizes() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/status/resolve/batch")
        .json(&json!({
            "sessions": [
                {"sessionStatus": "in_progress"},
                {"sessionStatus": "submitted"},
                {"sessionStatus": "submitted", "reviewStatus": "needs_revision"},
                {"sessionStatus": "resubmitted", "reviewStatus": "needs_revision"},
                {"sessionStatus": "submitted", "reviewStatus": "completed"},
                {"sessionStatus": "mystery"}
            ]
        }))
        .await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();
    assert!(batch.success);

    let keys: Vec<CombinedStatus> = batch
        .results
        .iter()
        .map(|r| r.status.combined_status)
        .collect();
    assert_eq!(
        keys,
        vec![
            CombinedStatus::InProgress,
            CombinedStatus::Submitted,
            CombinedStatus::NeedsRevision,
            CombinedStatus::Resubmitted,
            CombinedStatus::Completed,
            CombinedStatus::InProgress,
        ]
    );
    assert!(batch.results[5].fallback);

    let summary = batch.summary.unwrap();
    assert_eq!(summary.total, 6);
    assert_eq!(summary.in_progress, 2);
    assert_eq!(summary.fallbacks, 1);
    assert_eq!(summary.awaiting_review(), 2);
}

#[tokio::test]
async fn test_batch_empty() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/status/resolve/batch")
        .json(&json!({"sessions": []}))
        .await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();
    assert!(batch.results.is_empty());
    assert_eq!(batch.summary.unwrap().total, 0);
}

#[tokio::test]
async fn test_batch_too_large_rejected() {
    let (server, _guard) = create_test_server();

    let sessions: Vec<_> = (0..=MAX_BATCH_SIZE)
        .map(|_| json!({"sessionStatus": "in_progress"}))
        .collect();
    let response = server
        .post("/status/resolve/batch")
        .json(&json!({ "sessions": sessions }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let batch: BatchResponse = response.json();
    assert!(!batch.success);
    assert!(batch.summary.is_none());
}

// =============================================================================
// AUTHENTICATION TESTS
// =============================================================================

#[tokio::test]
async fn test_auth_valid_bearer_token() {
    let api_key = "test-secret-key-12345";
    let (server, _guard) = create_auth_test_server(api_key);

    let response = server
        .get("/statuses")
        .add_header(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {}", api_key)
                .parse::<HeaderValue>()
                .unwrap(),
        )
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_auth_valid_raw_token() {
    let api_key = "test-raw-key-67890";
    let (server, _guard) = create_auth_test_server(api_key);

    let response = server
        .get("/statuses")
        .add_header(
            axum::http::header::AUTHORIZATION,
            api_key.parse::<HeaderValue>().unwrap(),
        )
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_auth_invalid_token_rejected() {
    let (server, _guard) = create_auth_test_server("correct-key");

    let response = server
        .post("/status/resolve")
        .add_header(
            axum::http::header::AUTHORIZATION,
            "Bearer wrong-key".parse::<HeaderValue>().unwrap(),
        )
        .json(&json!({"sessionStatus": "in_progress"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_missing_header_rejected() {
    let (server, _guard) = create_auth_test_server("correct-key");

    let response = server.get("/statuses").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_health_endpoint_bypasses_auth() {
    let (server, _guard) = create_auth_test_server("correct-key");

    let response = server.get("/health").await;

    response.assert_status_ok();
}

// =============================================================================
// RATE LIMIT TESTS
// =============================================================================

#[tokio::test]
async fn test_rate_limit_rejects_burst() {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::remove_var("PENILAIAN_API_KEY") };
    let _guard = TestGuard { _guard: guard };

    let settings = ServerConfig {
        rate_limit: 1,
        ..ServerConfig::default()
    };
    let server = TestServer::new(create_router(AppState::new(settings))).unwrap();

    server.get("/health").await.assert_status_ok();
    let second = server.get("/health").await;

    assert_eq!(second.status_code(), StatusCode::TOO_MANY_REQUESTS);
}
