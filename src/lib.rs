//! Sentiment Inference Sidecar
//!
//! A small HTTP service that scores text sentiment two ways at once: a
//! convolutional classifier served through ONNX Runtime and the rule-based
//! VADER lexicon. One endpoint, one JSON envelope, results cached per
//! normalized input.

pub mod config;
pub mod error;
pub mod inference;
pub mod lexicon;
pub mod server;
pub mod service;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use inference::{SentimentClassifier, SentimentLabel, SequenceModel};
pub use lexicon::{LexiconScorer, LexiconScores};
pub use service::{Prediction, SentimentService};
