//! Parsing of free-form model output into a fixed-shape analysis result
//!
//! The upstream model is asked for a JSON object with a `summary` paragraph
//! and exactly five 0-10 trait scores, but nothing guarantees it complies.
//! Both extractors here are pure functions: any malformed input yields `None`
//! (with a warn log) rather than an error to the caller.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of trait scores every analysis carries
pub const SCORE_COUNT: usize = 5;

/// First `{` through last `}`, spanning newlines, to tolerate prose around
/// the JSON object
static JSON_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Lines of the form `**Label:** 7/10`; 1-2 digit scores, no range clamping
static LABELED_SCORE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[^*]+:\*\* (\d{1,2})/10").unwrap());

/// A parsed personality analysis: one summary paragraph plus the five trait
/// scores in the order the prompt requested them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    pub summary: String,
    pub scores: Vec<i64>,
}

/// Extracts a JSON-shaped analysis from model output.
///
/// The first brace-delimited span is parsed (the whole text if none is
/// found); the value must carry a non-empty `summary` and exactly five
/// `scores`. Anything else is the no-result sentinel.
pub fn parse_analysis_json(text: &str) -> Option<Analysis> {
    let json_text = JSON_SPAN_REGEX
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(text);

    let parsed: Analysis = match serde_json::from_str(json_text) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Failed to parse analysis JSON: {}", e);
            return None;
        }
    };

    if parsed.summary.is_empty() || parsed.scores.len() != SCORE_COUNT {
        tracing::warn!(
            summary_len = parsed.summary.len(),
            scores = parsed.scores.len(),
            "Analysis JSON has wrong shape"
        );
        return None;
    }
    Some(parsed)
}

/// Extracts scores from `**Label:** n/10` lines, in order of appearance.
///
/// Exactly five matches are required. Scores are taken as written; the
/// pattern admits two digits, so an enthusiastic `12/10` passes through
/// unclamped.
pub fn parse_labeled_scores(text: &str) -> Option<Vec<i64>> {
    let scores: Vec<i64> = LABELED_SCORE_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse().ok())
        .collect();

    if scores.len() != SCORE_COUNT {
        tracing::warn!(
            found = scores.len(),
            "Expected {} labeled scores in model output",
            SCORE_COUNT
        );
        return None;
    }
    Some(scores)
}
