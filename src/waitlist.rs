//! Waitlist signups forwarded to an external spreadsheet-backed form handler

use crate::error::{MindprintError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use tracing::info;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Lightweight shape check, not full RFC 5322
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub struct WaitlistForwarder {
    client: reqwest::Client,
    url: String,
}

impl WaitlistForwarder {
    pub fn new(url: String, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            // Surface redirects instead of following them; see forward()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| MindprintError::Config {
                message: format!("Failed to build reqwest client: {e}"),
            })?;
        Ok(Self { client, url })
    }

    /// Forward a validated email to the form handler and return its JSON
    /// payload. The handler answers a 302 when its deployment permissions
    /// are wrong, so that case gets a dedicated error message.
    pub async fn forward(&self, email: &str) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({
                "email": email,
                "joined_at": chrono::Utc::now().to_rfc3339(),
            }))
            .send()
            .await
            .map_err(|e| MindprintError::Upstream {
                message: format!("Failed to reach waitlist handler: {e}"),
            })?;

        if response.status() == reqwest::StatusCode::FOUND {
            return Err(MindprintError::Upstream {
                message: "Waitlist handler redirected; check deployment permissions".to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(MindprintError::Upstream {
                message: format!("Waitlist handler responded with status {}", response.status()),
            });
        }

        let data: serde_json::Value =
            response.json().await.map_err(|e| MindprintError::Upstream {
                message: format!("Failed to parse waitlist handler response: {e}"),
            })?;
        info!("Waitlist signup forwarded");
        Ok(data)
    }
}
