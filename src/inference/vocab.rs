//! Vocabulary encoding and fixed-length sequence padding.

use std::collections::HashMap;
use std::path::Path;

use super::{InferenceError, MAX_SEQUENCE_LENGTH, PRE_PAD_LENGTH};

/// Token-to-index mapping the classifier was trained with.
///
/// Indices are positive; zero is reserved for padding. Tokens absent from
/// the vocabulary are dropped during encoding rather than mapped to an
/// unknown index, matching the training pipeline.
pub struct Vocabulary {
    tokens: HashMap<String, i64>,
}

impl Vocabulary {
    /// Load the vocabulary from a JSON object of `{"token": index}` pairs.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InferenceError::VocabularyLoad(format!("{}: {e}", path.display()))
        })?;
        let tokens: HashMap<String, i64> = serde_json::from_str(&raw).map_err(|e| {
            InferenceError::VocabularyLoad(format!("{}: {e}", path.display()))
        })?;
        Ok(Self { tokens })
    }

    /// Build a vocabulary from an in-memory mapping.
    pub fn new(tokens: HashMap<String, i64>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Encode normalized text into token indices, dropping out-of-vocabulary
    /// tokens. Whitespace-only input encodes to an empty sequence.
    pub fn encode(&self, text: &str) -> Vec<i64> {
        text.split_whitespace()
            .filter_map(|token| self.tokens.get(token).copied())
            .collect()
    }
}

/// Pad (or truncate) an index sequence into the model's fixed input shape.
///
/// The training pipeline padded in two phases: front-pad or front-truncate
/// to [`PRE_PAD_LENGTH`], then back-pad to [`MAX_SEQUENCE_LENGTH`].
/// Truncation keeps the tail of the sequence, and the last five positions
/// of the output are always padding.
pub fn fixed_length_sequence(indices: &[i64]) -> Vec<i64> {
    let mut sequence = Vec::with_capacity(MAX_SEQUENCE_LENGTH);
    if indices.len() >= PRE_PAD_LENGTH {
        sequence.extend_from_slice(&indices[indices.len() - PRE_PAD_LENGTH..]);
    } else {
        sequence.resize(PRE_PAD_LENGTH - indices.len(), 0);
        sequence.extend_from_slice(indices);
    }
    sequence.resize(MAX_SEQUENCE_LENGTH, 0);
    sequence
}
