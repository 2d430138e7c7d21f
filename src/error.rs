//! Domain-specific error types for mindprint

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the mindprint service
#[derive(Error, Debug)]
pub enum MindprintError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Upstream service error: {message}")]
    Upstream { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Feature disabled: {message}")]
    FeatureDisabled { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for MindprintError {
    fn from(err: anyhow::Error) -> Self {
        MindprintError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MindprintError {
    fn from(err: serde_json::Error) -> Self {
        MindprintError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for MindprintError {
    fn from(err: reqwest::Error) -> Self {
        MindprintError::Upstream {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

/// Convert MindprintError to an HTTP response with a JSON error body
impl IntoResponse for MindprintError {
    fn into_response(self) -> Response {
        let (status, label, details) = match self {
            MindprintError::Config { message } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Configuration error",
                message,
            ),
            MindprintError::Validation { message } => {
                (StatusCode::BAD_REQUEST, "Validation error", message)
            }
            MindprintError::Upstream { message } => {
                (StatusCode::BAD_GATEWAY, "Upstream service error", message)
            }
            MindprintError::Serialization { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Serialization error",
                message,
            ),
            MindprintError::FeatureDisabled { message } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Feature disabled",
                message,
            ),
            MindprintError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
                message,
            ),
        };

        let body = json!({
            "success": false,
            "error": { "code": status.as_u16(), "message": format!("{label}: {details}") }
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Result type alias for mindprint operations
pub type Result<T> = std::result::Result<T, MindprintError>;
