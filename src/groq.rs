//! Groq chat-completions client
//!
//! Speaks the OpenAI-compatible `/chat/completions` endpoint with bearer
//! auth. Transient failures retry with exponential backoff before surfacing
//! as an upstream error.

use crate::error::{MindprintError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Seam between the request handlers and the text-generation service, so
/// handlers can be exercised with a canned provider in tests
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    retries: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GroqClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout_ms: u64,
        retries: u32,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| MindprintError::Config {
                message: format!("Failed to build reqwest client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            retries: retries.clamp(1, 5),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatProvider for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        debug!(
            "Requesting chat completion (model={}, user_chars={})",
            self.model,
            user.len()
        );

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };
        let url = format!("{}/chat/completions", self.base_url);

        // Retry with simple exponential backoff
        let mut last_err: Option<MindprintError> = None;
        for i in 0..self.retries {
            let send_res = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await;
            let response = match send_res {
                Ok(resp) => resp,
                Err(e) => {
                    last_err = Some(MindprintError::Upstream {
                        message: format!("Failed to send request to Groq API: {e}"),
                    });
                    let delay_ms = 200u64 * (1u64 << i);
                    tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                    continue;
                }
            };

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                last_err = Some(MindprintError::Upstream {
                    message: format!("Groq API error {status}: {error_text}"),
                });
                let delay_ms = 200u64 * (1u64 << i);
                tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                continue;
            }

            match response.json::<ChatResponse>().await {
                Ok(result) => {
                    return result
                        .choices
                        .into_iter()
                        .next()
                        .map(|c| c.message.content)
                        .ok_or_else(|| MindprintError::Upstream {
                            message: "No choices returned from Groq".to_string(),
                        });
                }
                Err(e) => {
                    last_err = Some(MindprintError::Upstream {
                        message: format!("Failed to parse Groq response: {e}"),
                    });
                    let delay_ms = 200u64 * (1u64 << i);
                    tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                }
            }
        }

        Err(last_err.unwrap_or_else(|| MindprintError::Upstream {
            message: "Unknown Groq API error".to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_defaults_and_overrides() {
        let client = GroqClient::new("key".to_string(), None, None, 1_000, 3).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);

        let client = GroqClient::new(
            "key".to_string(),
            None,
            Some("llama-3.3-70b-versatile".to_string()),
            1_000,
            3,
        )
        .unwrap();
        assert_eq!(client.model(), "llama-3.3-70b-versatile");
    }
}
