//! Environment-driven configuration

use crate::error::{MindprintError, Result};
use std::net::SocketAddr;

/// Runtime configuration loaded from environment variables (a `.env` file is
/// honored when present)
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key, required to serve analyses
    pub groq_api_key: String,
    /// Chat model identifier (MIND_GROQ_MODEL)
    pub groq_model: Option<String>,
    /// Override for the Groq-compatible API base URL (MIND_GROQ_BASE_URL)
    pub groq_base_url: Option<String>,
    /// Per-request timeout for chat completions
    pub groq_timeout_ms: u64,
    /// Retry attempts for chat completions, 1..=5
    pub groq_retries: u32,
    /// HTTP bind address (MIND_HTTP_BIND)
    pub http_bind: SocketAddr,
    /// Spreadsheet-backed form handler the waitlist forwards to; the
    /// endpoint is disabled when unset
    pub waitlist_url: Option<String>,
    /// Timeout for the waitlist forward
    pub waitlist_timeout_ms: u64,
    /// Log filter (MIND_LOG), e.g. `mindprint=debug,tower_http=info`
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let groq_api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();

        let http_bind = std::env::var("MIND_HTTP_BIND")
            .ok()
            .and_then(|s| s.parse::<SocketAddr>().ok())
            .unwrap_or_else(|| "127.0.0.1:8080".parse().expect("static addr"));

        let config = Self {
            groq_api_key,
            groq_model: std::env::var("MIND_GROQ_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty()),
            groq_base_url: std::env::var("MIND_GROQ_BASE_URL")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            groq_timeout_ms: std::env::var("MIND_GROQ_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30_000),
            groq_retries: std::env::var("MIND_GROQ_RETRIES")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|&n| n > 0 && n <= 5)
                .unwrap_or(3),
            http_bind,
            waitlist_url: std::env::var("MIND_WAITLIST_URL")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            waitlist_timeout_ms: std::env::var("MIND_WAITLIST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
            log_level: std::env::var("MIND_LOG").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if is_placeholder(&self.groq_api_key) {
            return Err(MindprintError::Config {
                message: "GROQ_API_KEY is not set".to_string(),
            });
        }
        if self.groq_timeout_ms == 0 {
            return Err(MindprintError::Config {
                message: "MIND_GROQ_TIMEOUT_MS must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_keys_are_rejected() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("  "));
        assert!(is_placeholder("${GROQ_API_KEY}"));
        assert!(is_placeholder("changeme"));
        assert!(!is_placeholder("gsk_live_abc123"));
    }
}
