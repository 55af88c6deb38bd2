//! Neural sentiment classification pipeline.
//!
//! Ties the pieces together: normalize text, encode it against the
//! vocabulary, pad to the model's fixed input length, score, and map the
//! winning class index to a label. Predictions are memoized per normalized
//! input so repeated queries skip the model entirely.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Mutex;

use lru::LruCache;
use tracing::{debug, info};

use super::{
    fixed_length_sequence, InferenceError, OnnxSequenceModel, SentimentLabel, SequenceModel,
    TextNormalizer, Vocabulary, CLASS_LABELS,
};

/// Number of predictions kept in the LRU cache.
const CACHE_CAPACITY: usize = 128;

/// Text-in, label-out sentiment classifier.
pub struct SentimentClassifier {
    model: Box<dyn SequenceModel>,
    vocabulary: Vocabulary,
    normalizer: TextNormalizer,
    cache: Mutex<LruCache<String, SentimentLabel>>,
}

impl SentimentClassifier {
    /// Build a classifier over an already-constructed scoring backend.
    pub fn new(model: Box<dyn SequenceModel>, vocabulary: Vocabulary) -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).expect("cache capacity is non-zero");
        Self {
            model,
            vocabulary,
            normalizer: TextNormalizer::new(),
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Load the ONNX model and vocabulary from disk.
    pub fn load(model_path: &Path, vocab_path: &Path) -> Result<Self, InferenceError> {
        let model = OnnxSequenceModel::load(model_path)?;
        let vocabulary = Vocabulary::load(vocab_path)?;
        info!(tokens = vocabulary.len(), "Vocabulary loaded");
        Ok(Self::new(Box::new(model), vocabulary))
    }

    /// Classify text as negative or positive.
    ///
    /// The cache is keyed by the normalized form, so inputs differing only
    /// in case, punctuation or stop words share one entry. A poisoned cache
    /// lock is treated as a miss.
    pub fn predict(&self, text: &str) -> Result<SentimentLabel, InferenceError> {
        let normalized = self.normalizer.normalize(text);

        if let Ok(mut cache) = self.cache.lock() {
            if let Some(label) = cache.get(&normalized) {
                debug!("Prediction cache hit");
                return Ok(*label);
            }
        }

        let indices = self.vocabulary.encode(&normalized);
        let sequence = fixed_length_sequence(&indices);
        let scores = self.model.class_scores(&sequence)?;

        if scores.len() != CLASS_LABELS.len() {
            return Err(InferenceError::ClassScores {
                expected: CLASS_LABELS.len(),
                got: scores.len(),
            });
        }

        let label = CLASS_LABELS[argmax(&scores)];
        debug!(negative = scores[0], positive = scores[1], %label, "Classified text");

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(normalized, label);
        }

        Ok(label)
    }
}

/// Index of the highest score. Ties resolve to the lowest index.
fn argmax(scores: &[f32]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}
