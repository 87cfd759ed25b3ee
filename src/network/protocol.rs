//! Wire Types
//!
//! JSON bodies for the score API. Request parsing is lenient: a body
//! that is not a JSON object is treated as empty, and every field has a
//! documented default. Nothing about a request body is a hard failure.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::store::scores::ScoreRecord;

/// Name stored when a submission carries none.
pub const ANONYMOUS: &str = "Anonymous";

/// Body of `POST /api/save-score`.
///
/// Both fields are optional: a missing `name` defaults to `"Anonymous"`
/// and a missing or non-numeric `score` defaults to `0`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveScoreRequest {
    /// Player name for the leaderboard entry.
    #[serde(default)]
    pub name: Option<String>,
    /// Submitted score. Non-numbers read as absent.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<i64>,
}

impl SaveScoreRequest {
    /// Parse a request body, treating anything malformed as empty.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Leaderboard name, `"Anonymous"` when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Submitted score, `0` when absent or non-numeric.
    pub fn score(&self) -> i64 {
        self.score.unwrap_or(0)
    }
}

/// Accept any JSON value for `score`, reading non-numbers as `None`.
/// Fractional scores are truncated toward zero.
fn lenient_score<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64)))
}

/// Success body of `POST /api/save-score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveScoreResponse {
    /// Whether the score was persisted.
    pub success: bool,
    /// The leaderboard after the submit.
    pub scores: Vec<ScoreRecord>,
}

/// Failure body of `POST /api/save-score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveScoreFailure {
    /// Always `false`.
    pub success: bool,
    /// What went wrong.
    pub error: String,
}

/// Generic error body for non-score endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_body() {
        let req = SaveScoreRequest::parse(br#"{"name": "Ada", "score": 123}"#);
        assert_eq!(req.name(), "Ada");
        assert_eq!(req.score(), 123);
    }

    #[test]
    fn test_missing_name_defaults_to_anonymous() {
        let req = SaveScoreRequest::parse(br#"{"score": 7}"#);
        assert_eq!(req.name(), "Anonymous");
        assert_eq!(req.score(), 7);
    }

    #[test]
    fn test_missing_score_defaults_to_zero() {
        let req = SaveScoreRequest::parse(br#"{"name": "Ada"}"#);
        assert_eq!(req.name(), "Ada");
        assert_eq!(req.score(), 0);
    }

    #[test]
    fn test_non_numeric_score_defaults_to_zero() {
        let req = SaveScoreRequest::parse(br#"{"name": "Ada", "score": "lots"}"#);
        assert_eq!(req.name(), "Ada");
        assert_eq!(req.score(), 0);
    }

    #[test]
    fn test_float_score_truncates() {
        let req = SaveScoreRequest::parse(br#"{"score": 99.7}"#);
        assert_eq!(req.score(), 99);
    }

    #[test]
    fn test_garbage_body_treated_as_empty() {
        let req = SaveScoreRequest::parse(b"definitely not json");
        assert_eq!(req.name(), "Anonymous");
        assert_eq!(req.score(), 0);
    }

    #[test]
    fn test_empty_body_treated_as_empty() {
        let req = SaveScoreRequest::parse(b"");
        assert_eq!(req.name(), "Anonymous");
        assert_eq!(req.score(), 0);
    }

    #[test]
    fn test_null_name_treated_as_absent() {
        let req = SaveScoreRequest::parse(br#"{"name": null, "score": 3}"#);
        assert_eq!(req.name(), "Anonymous");
        assert_eq!(req.score(), 3);
    }
}
