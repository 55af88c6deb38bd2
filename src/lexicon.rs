//! Rule-based sentiment scoring with the VADER lexicon.
//!
//! Runs alongside the neural classifier and reports the familiar
//! negative/neutral/positive ratios plus the normalized compound score.
//! Unlike the classifier, this operates on raw text: VADER uses
//! punctuation, capitalization and degree modifiers as intensity cues, so
//! it must see the input before any cleaning.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Polarity ratios and compound score for one piece of text.
///
/// `neg`, `neu` and `pos` are proportions that sum to roughly 1.0 for
/// non-empty input. `compound` is the lexicon's aggregate in `[-1, 1]`,
/// with 0 for text carrying no scored tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LexiconScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Stateless VADER analyzer wrapper.
pub struct LexiconScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score raw text. Deterministic, keys absent from the analyzer output
    /// default to 0.
    pub fn score(&self, text: &str) -> LexiconScores {
        let scores = self.analyzer.polarity_scores(text);
        LexiconScores {
            neg: scores.get("neg").copied().unwrap_or(0.0),
            neu: scores.get("neu").copied().unwrap_or(0.0),
            pos: scores.get("pos").copied().unwrap_or(0.0),
            compound: scores.get("compound").copied().unwrap_or(0.0),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}
