//! HTTP surface for mindprint
//!
//! Axum router exposing the two analysis games, the stimulus generator, the
//! waitlist, and plain-JSON health/info/metrics endpoints.

use crate::analysis;
use crate::config::Config;
use crate::error::{MindprintError, Result};
use crate::groq::ChatProvider;
use crate::prompts;
use crate::schemas::{
    AnalyzeResponse, BlockAnalyzeRequest, StimuliParams, StimuliResponse, WaitlistRequest,
    WaitlistResponse, WordAnalyzeRequest,
};
use crate::waitlist::{self, WaitlistForwarder};
use crate::word_bank;
use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use std::{cmp::Ordering, sync::Arc};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chat: Arc<dyn ChatProvider>,
    pub waitlist: Option<Arc<WaitlistForwarder>>,
    pub metrics: Arc<Mutex<HttpMetrics>>,
}

/// Metrics for the HTTP server
#[derive(Debug, Clone)]
pub struct HttpMetrics {
    pub total_requests: u64,
    pub errors_total: u64,
    pub last_request_unix: u64,
    pub latencies: Vec<f64>, // ring buffer for p95
}

impl HttpMetrics {
    fn new() -> Self {
        Self {
            total_requests: 0,
            errors_total: 0,
            last_request_unix: std::time::SystemTime::UNIX_EPOCH
                .elapsed()
                .unwrap_or_default()
                .as_secs(),
            latencies: Vec::with_capacity(256),
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Info endpoint
pub async fn info_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json!({
            "chat": {
                "model": state.config.groq_model.as_deref().unwrap_or("openai/gpt-oss-20b"),
            },
            "word_bank": {
                "size": word_bank::WORD_BANK.len(),
                "categories": word_bank::CATEGORIES.len(),
            },
            "server": {
                "bind": state.config.http_bind.to_string(),
                "waitlist_enabled": state.waitlist.is_some(),
            }
        })
        .to_string(),
    )
}

/// Metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let metrics = state.metrics.lock().await.clone();

    let (avg_latency_ms, p95_latency_ms) = if metrics.latencies.is_empty() {
        (None, None)
    } else {
        let sum: f64 = metrics.latencies.iter().sum();
        let avg = sum / metrics.latencies.len() as f64;
        let mut sorted = metrics.latencies.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let p95_idx = (sorted.len() as f64 * 0.95) as usize;
        let p95 = sorted.get(p95_idx).copied();
        (Some(avg), p95)
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json!({
            "metrics_version": "1",
            "total_requests": metrics.total_requests,
            "errors_total": metrics.errors_total,
            "last_request_unix": metrics.last_request_unix,
            "avg_latency_ms": avg_latency_ms,
            "p95_latency_ms": p95_latency_ms,
        })
        .to_string(),
    )
}

/// Serve a stimulus word sequence for the association game
pub async fn stimuli_handler(Query(params): Query<StimuliParams>) -> Json<StimuliResponse> {
    let words = if params.interleaved {
        word_bank::interleaved_words(params.count)
    } else {
        word_bank::random_words(params.count)
    };
    Json(StimuliResponse { words })
}

/// Analyze word-association results
pub async fn word_analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<WordAnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    if req.responses.trim().is_empty() {
        return Err(MindprintError::Validation {
            message: "No responses provided".to_string(),
        });
    }

    let reply = state
        .chat
        .complete(
            prompts::WORD_ANALYSIS_SYSTEM,
            &prompts::word_user_message(&req.responses),
        )
        .await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: analysis::parse_analysis_json(&reply),
    }))
}

/// Analyze block-catcher gameplay
pub async fn block_analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<BlockAnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    if req.game_data.trim().is_empty() {
        return Err(MindprintError::Validation {
            message: "No game data provided".to_string(),
        });
    }

    let reply = state
        .chat
        .complete(
            prompts::BLOCK_ANALYSIS_SYSTEM,
            &prompts::block_user_message(&req.game_data),
        )
        .await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: analysis::parse_analysis_json(&reply),
    }))
}

/// Join the waitlist
pub async fn waitlist_handler(
    State(state): State<AppState>,
    Json(req): Json<WaitlistRequest>,
) -> Result<Json<WaitlistResponse>> {
    if req.email.is_empty() {
        return Err(MindprintError::Validation {
            message: "Email is required".to_string(),
        });
    }
    if !waitlist::is_valid_email(&req.email) {
        return Err(MindprintError::Validation {
            message: "Invalid email format".to_string(),
        });
    }
    let forwarder = state
        .waitlist
        .as_ref()
        .ok_or_else(|| MindprintError::FeatureDisabled {
            message: "Waitlist forwarding is not configured".to_string(),
        })?;

    let data = forwarder.forward(&req.email).await?;
    Ok(Json(WaitlistResponse {
        success: true,
        message: "Successfully added to waitlist!".to_string(),
        data: Some(data),
    }))
}

/// Build the router with CORS and a request-metrics layer
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .route("/metrics", get(metrics_handler))
        .route("/word/stimuli", get(stimuli_handler))
        .route("/word/analyze", post(word_analyze_handler))
        .route("/block/analyze", post(block_analyze_handler))
        .route("/api/waitlist", post(waitlist_handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            |State(metrics): State<Arc<Mutex<HttpMetrics>>>,
             req: axum::http::Request<Body>,
             next: axum::middleware::Next| async move {
                let counted = req.uri().path() != "/health";
                let start = if counted {
                    Some(std::time::Instant::now())
                } else {
                    None
                };
                let resp = next.run(req).await;
                if let Some(start_time) = start {
                    let latency_ms = start_time.elapsed().as_millis() as f64;
                    let mut m = metrics.lock().await;
                    if latency_ms > 0.0 {
                        m.latencies.push(latency_ms);
                        if m.latencies.len() > 256 {
                            m.latencies.remove(0);
                        }
                    }
                    if !resp.status().is_success() {
                        m.errors_total = m.errors_total.saturating_add(1);
                    }
                    m.total_requests = m.total_requests.saturating_add(1);
                    m.last_request_unix = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .unwrap_or_default()
                        .as_secs();
                }
                resp
            },
        ))
        .with_state(state)
}

/// Construct state from config and start the HTTP server
pub async fn start_http_server(config: Config, chat: Arc<dyn ChatProvider>) -> Result<()> {
    let waitlist = match &config.waitlist_url {
        Some(url) => Some(Arc::new(WaitlistForwarder::new(
            url.clone(),
            config.waitlist_timeout_ms,
        )?)),
        None => {
            tracing::warn!("MIND_WAITLIST_URL not set; waitlist endpoint disabled");
            None
        }
    };

    let bind = config.http_bind;
    let state = AppState {
        config: Arc::new(config),
        chat,
        waitlist,
        metrics: Arc::new(Mutex::new(HttpMetrics::new())),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!("Starting HTTP server on {}", bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}

/// Fresh metrics handle for callers assembling their own `AppState`
pub fn new_metrics() -> Arc<Mutex<HttpMetrics>> {
    Arc::new(Mutex::new(HttpMetrics::new()))
}
