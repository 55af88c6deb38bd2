//! Text normalisation for the sentiment classifier.
//!
//! This module reproduces the cleaning transform the classifier was trained
//! with: newline removal, punctuation stripping, lowercasing and stop-word
//! removal. The output feeds the vocabulary encoder, so any deviation here
//! shifts the model's input distribution.

use regex::Regex;
use std::collections::HashSet;

/// English stop words, matching the NLTK corpus list used at training time.
/// The apostrophe entries can never match once punctuation has been
/// stripped ("don't" cleans to "dont"), which is faithful to the training
/// pipeline rather than an oversight.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "she's", "her",
    "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "again", "further", "then", "once", "here", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m",
    "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
    "won't", "wouldn", "wouldn't",
];

/// Deterministic text cleaner for classifier input.
///
/// The transform is idempotent on text it has already normalised. Inputs
/// with runs of three or more spaces are only partially collapsed (a single
/// replace pass, as in the training pipeline), so full idempotence is not
/// guaranteed for irregular whitespace.
pub struct TextNormalizer {
    punctuation: Regex,
    stop_words: HashSet<&'static str>,
    remove_stop_words: bool,
}

impl TextNormalizer {
    /// Create a normalizer with stop-word removal enabled (the default
    /// used at training time).
    pub fn new() -> Self {
        Self::with_stop_word_removal(true)
    }

    pub fn with_stop_word_removal(remove_stop_words: bool) -> Self {
        Self {
            punctuation: Regex::new(r"[^\w\s]").expect("valid regex"),
            stop_words: STOP_WORDS.iter().copied().collect(),
            remove_stop_words,
        }
    }

    /// Normalize raw text into the classifier's canonical form.
    ///
    /// Steps, in order: drop newline characters, delete everything that is
    /// not a word character or whitespace, lowercase, drop stop words
    /// (splitting on single spaces), trim, and collapse double spaces in
    /// one pass. Empty input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.replace('\n', "");
        let cleaned = self.punctuation.replace_all(&text, "").to_lowercase();

        let kept = if self.remove_stop_words {
            cleaned
                .split(' ')
                .filter(|token| !self.stop_words.contains(*token))
                .map(|token| format!(" {token}"))
                .collect::<String>()
        } else {
            cleaned
        };

        kept.trim().replace("  ", " ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_lowercases() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn test_removes_stop_words() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("this is a great movie"), "great movie");
    }

    #[test]
    fn test_stop_words_kept_when_disabled() {
        let normalizer = TextNormalizer::with_stop_word_removal(false);
        assert_eq!(
            normalizer.normalize("this is a great movie"),
            "this is a great movie"
        );
    }

    #[test]
    fn test_newlines_removed_without_space() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("good\nbad"), "goodbad");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let normalizer = TextNormalizer::new();
        let once = normalizer.normalize("great movie night");
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "great movie night");
    }

    #[test]
    fn test_double_space_collapses() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("hello  world"), "hello world");
    }

    #[test]
    fn test_triple_space_collapses_one_pass_only() {
        let normalizer = TextNormalizer::new();
        // Single replace pass, matching the training pipeline: three
        // spaces become two, not one.
        assert_eq!(normalizer.normalize("hello   world"), "hello  world");
    }

    #[test]
    fn test_apostrophes_strip_before_stop_word_check() {
        let normalizer = TextNormalizer::new();
        // "don't" cleans to "dont", which is not in the stop list, so it
        // survives even though "don't" itself is listed.
        assert_eq!(normalizer.normalize("don't stop"), "dont stop");
    }
}
