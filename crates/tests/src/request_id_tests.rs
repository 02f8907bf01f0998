use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn responses_carry_a_generated_request_id() {
    let app = common::test_app();
    let (status, headers, _) = common::get(&app, "/health", &[]).await;

    assert_eq!(status, StatusCode::OK);
    let id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(id.len(), 36, "expected a UUID, got {id:?}");
}

#[tokio::test]
async fn caller_request_id_is_echoed_back() {
    let app = common::test_app();
    let (_, headers, _) = common::get(&app, "/health", &[("x-request-id", "trace-abc-123")]).await;

    assert_eq!(
        headers.get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("trace-abc-123")
    );
}

#[tokio::test]
async fn health_body_reports_ok() {
    let app = common::test_app();
    let (_, _, body) = common::get(&app, "/health", &[]).await;

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
