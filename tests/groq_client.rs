//! GroqClient wire-level tests against a mock chat-completions endpoint

use mindprint::groq::{ChatProvider, GroqClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, retries: u32) -> GroqClient {
    GroqClient::new(
        "test-key".to_string(),
        Some(server.uri()),
        Some("openai/gpt-oss-20b".to_string()),
        2_000,
        retries,
    )
    .unwrap()
}

#[tokio::test]
async fn complete_returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "openai/gpt-oss-20b"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "{\"summary\":\"ok\",\"scores\":[1,2,3,4,5]}"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let reply = client.complete("system prompt", "user message").await.unwrap();
    assert!(reply.contains("\"scores\""));
}

#[tokio::test]
async fn complete_sends_system_and_user_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "usr"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "hello"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    assert_eq!(client.complete("sys", "usr").await.unwrap(), "hello");
}

#[tokio::test]
async fn server_errors_are_retried_then_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let err = client.complete("sys", "usr").await.unwrap_err();
    assert!(err.to_string().contains("Groq API error"));
}

#[tokio::test]
async fn empty_choices_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let err = client.complete("sys", "usr").await.unwrap_err();
    assert!(err.to_string().contains("No choices"));
}
