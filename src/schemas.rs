//! Request and response schemas for the HTTP surface

use crate::analysis::Analysis;
use serde::{Deserialize, Serialize};

/// Body for `POST /word/analyze`
#[derive(Debug, Deserialize)]
pub struct WordAnalyzeRequest {
    /// Raw word-association results as collected by the client
    #[serde(default)]
    pub responses: String,
}

/// Body for `POST /block/analyze`
#[derive(Debug, Deserialize)]
pub struct BlockAnalyzeRequest {
    /// Raw gameplay log as collected by the client
    #[serde(default, rename = "gameData")]
    pub game_data: String,
}

/// Response for both analyze endpoints. A model reply the parser could not
/// shape is reported as `analysis: null`, not as an HTTP error.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: Option<Analysis>,
}

/// Query parameters for `GET /word/stimuli`
#[derive(Debug, Deserialize)]
pub struct StimuliParams {
    #[serde(default = "default_stimulus_count")]
    pub count: usize,
    /// Interleave across semantic categories instead of sampling uniformly
    #[serde(default)]
    pub interleaved: bool,
}

fn default_stimulus_count() -> usize {
    10
}

/// Response for `GET /word/stimuli`
#[derive(Debug, Serialize)]
pub struct StimuliResponse {
    pub words: Vec<&'static str>,
}

/// Body for `POST /api/waitlist`
#[derive(Debug, Deserialize)]
pub struct WaitlistRequest {
    #[serde(default)]
    pub email: String,
}

/// Response for `POST /api/waitlist`
#[derive(Debug, Serialize)]
pub struct WaitlistResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
