//! API request and response types for the predict endpoint.

use serde::{Deserialize, Serialize};

use crate::inference::SentimentLabel;
use crate::lexicon::LexiconScores;
use crate::service::Prediction;

/// Query parameters accepted by `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictParams {
    /// Text to analyze, passed as the `test` query parameter.
    #[serde(default)]
    pub test: Option<String>,
}

/// Response envelope for `POST /predict`.
///
/// `success` is false for malformed requests and inference failures, and
/// the estimator fields are omitted entirely in that case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Whether analysis ran to completion.
    pub success: bool,
    /// Neural classifier verdict for the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
    /// VADER lexicon scores for the same text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nltk: Option<LexiconScores>,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            success: true,
            sentiment: Some(prediction.label),
            nltk: Some(prediction.lexicon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_includes_both_estimators() {
        let prediction = Prediction {
            label: SentimentLabel::Positive,
            lexicon: LexiconScores {
                neg: 0.0,
                neu: 0.3,
                pos: 0.7,
                compound: 0.81,
            },
        };
        let response = PredictResponse::from(prediction);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["nltk"]["compound"], 0.81);
        assert_eq!(json["nltk"]["pos"], 0.7);
    }

    #[test]
    fn test_failure_response_is_bare_flag() {
        let json = serde_json::to_value(PredictResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({"success": false}));
    }

    #[test]
    fn test_params_tolerate_missing_text() {
        let params: PredictParams = serde_json::from_str("{}").unwrap();
        assert!(params.test.is_none());
    }
}
