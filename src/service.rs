//! Sentiment analysis service shared across request handlers.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::inference::{SentimentClassifier, SentimentLabel};
use crate::lexicon::{LexiconScorer, LexiconScores};

/// Combined result of one analysis pass over a piece of text.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub label: SentimentLabel,
    pub lexicon: LexiconScores,
}

/// The analysis engine behind the HTTP surface: the neural classifier and
/// the VADER lexicon scorer, run on the same decoded input.
pub struct SentimentService {
    classifier: SentimentClassifier,
    lexicon: LexiconScorer,
}

impl SentimentService {
    pub fn new(classifier: SentimentClassifier) -> Self {
        Self {
            classifier,
            lexicon: LexiconScorer::new(),
        }
    }

    /// Load model artifacts from the configured paths. Failure here is
    /// fatal at startup; the server never runs without a working model.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let classifier =
            SentimentClassifier::load(&config.model.model_path, &config.model.vocab_path)?;
        Ok(Self::new(classifier))
    }

    /// Analyze query text. Literal `%20` sequences are decoded to spaces
    /// first, then both estimators see the same decoded text.
    ///
    /// This is CPU-bound and synchronous; handlers run it on a blocking
    /// thread.
    pub fn analyze(&self, raw_text: &str) -> Result<Prediction, AppError> {
        let text = decode_spaces(raw_text);
        let label = self.classifier.predict(&text)?;
        let lexicon = self.lexicon.score(&text);
        Ok(Prediction { label, lexicon })
    }
}

/// Replace literal `%20` escapes with spaces.
///
/// The HTTP layer has already percent-decoded the query string once, so
/// this catches clients that double-encode spaces. Every other escape
/// sequence passes through untouched.
pub fn decode_spaces(raw: &str) -> String {
    raw.replace("%20", " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{InferenceError, SequenceModel, Vocabulary};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    struct FixedScores(Vec<f32>);

    impl SequenceModel for FixedScores {
        fn class_scores(&self, _sequence: &[i64]) -> Result<Vec<f32>, InferenceError> {
            Ok(self.0.clone())
        }
    }

    struct CapturingModel {
        scores: Vec<f32>,
        last_sequence: Arc<Mutex<Vec<i64>>>,
    }

    impl SequenceModel for CapturingModel {
        fn class_scores(&self, sequence: &[i64]) -> Result<Vec<f32>, InferenceError> {
            *self.last_sequence.lock().unwrap() = sequence.to_vec();
            Ok(self.scores.clone())
        }
    }

    fn test_vocab() -> Vocabulary {
        let mut tokens = HashMap::new();
        tokens.insert("great".to_string(), 1);
        tokens.insert("movie".to_string(), 2);
        Vocabulary::new(tokens)
    }

    fn test_service(model: Box<dyn SequenceModel>) -> SentimentService {
        SentimentService::new(SentimentClassifier::new(model, test_vocab()))
    }

    #[test]
    fn test_decode_spaces() {
        assert_eq!(decode_spaces("hello%20world"), "hello world");
        assert_eq!(decode_spaces("hello world"), "hello world");
        assert_eq!(decode_spaces("50%25%20off"), "50%25 off");
        assert_eq!(decode_spaces(""), "");
    }

    #[test]
    fn test_analyze_combines_both_estimators() {
        let service = test_service(Box::new(FixedScores(vec![0.1, 0.9])));
        let prediction = service.analyze("I love this movie").unwrap();
        assert_eq!(prediction.label, SentimentLabel::Positive);
        assert!(prediction.lexicon.compound > 0.0);
    }

    #[test]
    fn test_analyze_decodes_before_scoring() {
        // Undecoded, "I%20love%20this" is a single token neither estimator
        // recognizes; decoded, the lexicon sees "love".
        let service = test_service(Box::new(FixedScores(vec![0.9, 0.1])));
        let prediction = service.analyze("I%20love%20this").unwrap();
        assert!(prediction.lexicon.compound > 0.0);
    }

    #[test]
    fn test_analyze_feeds_decoded_tokens_to_model() {
        let last_sequence = Arc::new(Mutex::new(Vec::new()));
        let model = CapturingModel {
            scores: vec![0.5, 0.5],
            last_sequence: Arc::clone(&last_sequence),
        };
        let service = test_service(Box::new(model));

        service.analyze("great%20movie").unwrap();

        let sequence = last_sequence.lock().unwrap().clone();
        assert_eq!(sequence.len(), 30);
        // The two known tokens sit at the end of the front-padded region.
        assert_eq!(&sequence[23..25], &[1, 2]);
        assert!(sequence[25..].iter().all(|&i| i == 0));
    }
}
