//! Endpoint-level tests for the mindprint router using a canned chat provider

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mindprint::config::Config;
use mindprint::error::Result;
use mindprint::groq::ChatProvider;
use mindprint::http::{AppState, build_router, new_metrics};
use mindprint::word_bank::WORD_BANK;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Chat provider that replays a fixed response
struct CannedChat {
    reply: String,
}

#[async_trait]
impl ChatProvider for CannedChat {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

fn test_config() -> Config {
    Config {
        groq_api_key: "test-key".to_string(),
        groq_model: None,
        groq_base_url: None,
        groq_timeout_ms: 1_000,
        groq_retries: 1,
        http_bind: "127.0.0.1:0".parse().unwrap(),
        waitlist_url: None,
        waitlist_timeout_ms: 1_000,
        log_level: None,
    }
}

fn test_router(reply: &str) -> axum::Router {
    let state = AppState {
        config: Arc::new(test_config()),
        chat: Arc::new(CannedChat {
            reply: reply.to_string(),
        }),
        waitlist: None,
        metrics: new_metrics(),
    };
    build_router(state)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let app = test_router("");
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn stimuli_returns_requested_count() {
    let app = test_router("");
    let resp = app
        .oneshot(
            Request::get("/word/stimuli?count=12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["words"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn stimuli_clamps_oversized_count() {
    let app = test_router("");
    let resp = app
        .oneshot(
            Request::get("/word/stimuli?count=999999&interleaved=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["words"].as_array().unwrap().len(), WORD_BANK.len());
}

#[tokio::test]
async fn word_analyze_round_trip() {
    let reply = r#"{"summary":"You lean abstract.","scores":[8,6,2,4,9]}"#;
    let app = test_router(reply);
    let resp = app
        .oneshot(post_json(
            "/word/analyze",
            json!({"responses": "ocean -> calm (812ms)"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["analysis"]["summary"], json!("You lean abstract."));
    assert_eq!(body["analysis"]["scores"], json!([8, 6, 2, 4, 9]));
}

#[tokio::test]
async fn unparseable_model_output_yields_null_analysis() {
    let app = test_router("I'm sorry, I can't format that as JSON today.");
    let resp = app
        .oneshot(post_json(
            "/word/analyze",
            json!({"responses": "ocean -> calm"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["analysis"].is_null());
}

#[tokio::test]
async fn word_analyze_rejects_empty_responses() {
    let app = test_router("");
    let resp = app
        .oneshot(post_json("/word/analyze", json!({"responses": ""})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn block_analyze_round_trip() {
    let reply = r#"{"summary":"You chase the yellow pellets.","scores":[9,7,2,5,8]}"#;
    let app = test_router(reply);
    let resp = app
        .oneshot(post_json(
            "/block/analyze",
            json!({"gameData": "[{\"action\":\"move_left\",\"t\":120}]"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["analysis"]["scores"], json!([9, 7, 2, 5, 8]));
}

#[tokio::test]
async fn block_analyze_rejects_missing_game_data() {
    let app = test_router("");
    let resp = app
        .oneshot(post_json("/block/analyze", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn waitlist_rejects_invalid_email() {
    let app = test_router("");
    let resp = app
        .oneshot(post_json("/api/waitlist", json!({"email": "not-an-email"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn waitlist_reports_when_unconfigured() {
    let app = test_router("");
    let resp = app
        .oneshot(post_json(
            "/api/waitlist",
            json!({"email": "user@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn metrics_counts_requests() {
    let app = test_router("");
    let _ = app
        .clone()
        .oneshot(
            Request::get("/word/stimuli?count=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["total_requests"].as_u64().unwrap() >= 1);
}
