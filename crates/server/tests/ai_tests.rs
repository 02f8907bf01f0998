mod common;

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use server::ai::GeminiClient;
use shared_types::{AiConfig, AppErrorKind};

fn config_for(base: &str) -> AiConfig {
    AiConfig {
        endpoint: base.to_string(),
        model: "test-model".into(),
        idea_count: 2,
    }
}

async fn ideas_handler(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "message": "API key not valid" } })),
        );
    }
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let ideas = json!([
        { "title": "Leaf Journal", "description": prompt, "estimatedTime": "1 week" },
        { "title": "Light Lab", "description": "Grow cress in the dark and light.", "estimatedTime": "45 mins" }
    ]);
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [ { "content": { "parts": [ { "text": ideas.to_string() } ] } } ]
        })),
    )
}

fn stub_router() -> Router {
    Router::new().route("/models/test-model:generateContent", post(ideas_handler))
}

#[tokio::test]
async fn client_returns_ideas_from_service() {
    let base = common::spawn_stub(stub_router()).await;
    let client = GeminiClient::new("test-key", config_for(&base));

    let ideas = client.assignment_ideas("Photosynthesis").await.unwrap();

    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[1].title, "Light Lab");
    assert!(ideas[0].description.contains("Photosynthesis"));
    assert!(ideas[0].description.contains("Generate 2"));
}

#[tokio::test]
async fn rejected_key_is_upstream_error() {
    let base = common::spawn_stub(stub_router()).await;
    let client = GeminiClient::new("wrong-key", config_for(&base));

    let err = client.assignment_ideas("Photosynthesis").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert!(err.message.contains("403"));
}

#[tokio::test]
async fn unreachable_service_is_upstream_error() {
    // Nothing listens on the discard port.
    let client = GeminiClient::new("test-key", config_for("http://127.0.0.1:9"));

    let err = client.assignment_ideas("Photosynthesis").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn garbage_reply_is_upstream_error() {
    let router = Router::new().route(
        "/models/test-model:generateContent",
        post(|| async { "not json at all" }),
    );
    let base = common::spawn_stub(router).await;
    let client = GeminiClient::new("test-key", config_for(&base));

    let err = client.assignment_ideas("Photosynthesis").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
}
