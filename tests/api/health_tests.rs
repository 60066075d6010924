//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_ignores_database() {
    let app = TestApp::with_probe(false);

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_when_database_answers() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_ne!(json["status"], "unhealthy");
    assert!(json["checks"]["database"]["latency_ms"].is_u64());
}

#[tokio::test]
async fn test_readiness_when_database_is_down() {
    let app = TestApp::with_probe(false);

    let response = app.server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Database connection failed"
    );
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_request_counters() {
    let app = TestApp::new();
    app.server.get("/api/roles").await.assert_status_ok();

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    assert!(response.text().contains("dental_clinic_http_requests_total"));
}
