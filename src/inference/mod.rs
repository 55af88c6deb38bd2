//! ML inference module for the neural sentiment classifier.
//!
//! This module wraps a pre-trained fixed-length-sequence classifier
//! (ONNX Runtime) together with the text normalisation and vocabulary
//! encoding it was trained with.

mod classifier;
mod model;
mod text;
mod vocab;

pub use classifier::SentimentClassifier;
pub use model::{OnnxSequenceModel, SequenceModel};
pub use text::TextNormalizer;
pub use vocab::{fixed_length_sequence, Vocabulary};

use serde::{Deserialize, Serialize};

/// Fixed input length (in token indices) the classifier expects.
pub const MAX_SEQUENCE_LENGTH: usize = 30;

/// Target length of the first padding phase. The training pipeline padded
/// front-first to this length, then back-padded up to `MAX_SEQUENCE_LENGTH`,
/// so inference has to reproduce both phases in order.
pub const PRE_PAD_LENGTH: usize = MAX_SEQUENCE_LENGTH - 5;

/// Ordered class label set. The model's output index selects into this
/// array, so its order must match the training labels exactly.
pub const CLASS_LABELS: [SentimentLabel; 2] =
    [SentimentLabel::Negative, SentimentLabel::Positive];

/// Sentiment class predicted by the neural classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Positive,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inference error types
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Vocabulary load failed: {0}")]
    VocabularyLoad(String),

    #[error("ONNX runtime error: {0}")]
    Onnx(String),

    #[error("Model returned {got} class scores, expected {expected}")]
    ClassScores { expected: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order_matches_class_indices() {
        assert_eq!(CLASS_LABELS[0], SentimentLabel::Negative);
        assert_eq!(CLASS_LABELS[1], SentimentLabel::Positive);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }

    #[test]
    fn test_sequence_length_constants() {
        assert_eq!(MAX_SEQUENCE_LENGTH, 30);
        assert_eq!(PRE_PAD_LENGTH, 25);
    }
}
