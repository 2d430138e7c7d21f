use anyhow::Result;
use mindprint::{config::Config, groq::GroqClient, http::start_http_server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    mindprint::load_env();

    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let log_level = config.log_level.as_deref().unwrap_or("mindprint=info");
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_ansi(false)
        .init();

    let chat = GroqClient::new(
        config.groq_api_key.clone(),
        config.groq_base_url.clone(),
        config.groq_model.clone(),
        config.groq_timeout_ms,
        config.groq_retries,
    )?;

    info!(
        "Starting mindprint (model={}, bank={} words)",
        chat.model(),
        mindprint::word_bank::WORD_BANK.len()
    );

    start_http_server(config, Arc::new(chat)).await?;

    Ok(())
}
