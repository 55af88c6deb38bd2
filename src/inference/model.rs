//! Sequence model wrapper for ONNX Runtime inference.

use std::path::Path;
use std::sync::Mutex;

use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use tracing::{debug, info};

use super::{InferenceError, MAX_SEQUENCE_LENGTH};

/// Class-score backend for fixed-length token sequences.
///
/// The production implementation wraps an ONNX session. Tests substitute
/// deterministic stand-ins so the HTTP surface and caching can be exercised
/// without model files on disk.
pub trait SequenceModel: Send + Sync {
    /// Score one padded sequence of [`MAX_SEQUENCE_LENGTH`] token indices,
    /// returning one raw score per class.
    fn class_scores(&self, sequence: &[i64]) -> Result<Vec<f32>, InferenceError>;
}

/// Convolutional sentiment classifier loaded from an ONNX export.
///
/// `Session::run` needs mutable access, so the session sits behind a mutex
/// and requests queue for the model. Inference on a single padded sequence
/// is fast enough that this has not been worth sharding.
pub struct OnnxSequenceModel {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl std::fmt::Debug for OnnxSequenceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxSequenceModel")
            .field("input", &self.input_name)
            .field("output", &self.output_name)
            .finish()
    }
}

impl OnnxSequenceModel {
    /// Load the classifier from an ONNX file. Fails if the file is missing
    /// or not a valid model.
    pub fn load(model_path: &Path) -> Result<Self, InferenceError> {
        info!(path = %model_path.display(), "Loading sentiment model");

        let model_bytes = std::fs::read(model_path)
            .map_err(|e| InferenceError::ModelLoad(format!("{}: {e}", model_path.display())))?;

        let session = Session::builder()
            .map_err(|e| InferenceError::Onnx(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Onnx(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| InferenceError::Onnx(e.to_string()))?
            .commit_from_memory(&model_bytes)
            .map_err(|e| InferenceError::ModelLoad(format!("{}: {e}", model_path.display())))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| InferenceError::ModelLoad("model declares no inputs".to_string()))?;
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::ModelLoad("model declares no outputs".to_string()))?;

        debug!(
            inputs = ?session.inputs.iter().map(|i| &i.name).collect::<Vec<_>>(),
            outputs = ?session.outputs.iter().map(|o| &o.name).collect::<Vec<_>>(),
            "Sentiment model loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}

impl SequenceModel for OnnxSequenceModel {
    fn class_scores(&self, sequence: &[i64]) -> Result<Vec<f32>, InferenceError> {
        // Shape [1, MAX_SEQUENCE_LENGTH]; from_array rejects sequences of
        // any other length.
        let input = Tensor::from_array((
            [1usize, MAX_SEQUENCE_LENGTH],
            sequence.to_vec().into_boxed_slice(),
        ))
        .map_err(|e| InferenceError::Onnx(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| InferenceError::Onnx(format!("Session lock error: {e}")))?;

        let outputs = session
            .run(ort::inputs![self.input_name.clone() => input])
            .map_err(|e| InferenceError::Onnx(e.to_string()))?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| InferenceError::Onnx(format!("Output '{}' not found", self.output_name)))?;

        // Extract tensor data - returns (shape, data_slice)
        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Onnx(e.to_string()))?;

        debug!(?shape, data_len = data.len(), "Sentiment model output");

        Ok(data.to_vec())
    }
}
