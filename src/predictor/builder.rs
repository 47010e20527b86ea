use log::{error, info};
use std::path::Path;
use std::sync::Arc;

use super::decoder::LabelDecoder;
use super::error::PredictorError;
use super::model::{InferenceModel, OnnxModel};
use super::predictor::Predictor;
use crate::runtime::{create_session_builder, RuntimeConfig};
use crate::vocabulary::SymptomVocabulary;

/// A builder for constructing a Predictor with a fluent interface.
///
/// Loading happens once at startup; every failure here is a `Build` error
/// and means the process must not start serving traffic.
#[derive(Default, Debug)]
pub struct PredictorBuilder {
    model_path: Option<String>,
    labels_path: Option<String>,
    runtime_config: RuntimeConfig,
}

impl PredictorBuilder {
    pub fn new() -> Self {
        Self {
            model_path: None,
            labels_path: None,
            runtime_config: RuntimeConfig::default(),
        }
    }

    /// Sets the runtime configuration for ONNX model execution
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Sets the path of the ONNX classifier artifact
    ///
    /// # Errors
    /// `Build` if the path is empty, already set, or does not exist.
    pub fn with_model_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PredictorError> {
        let path = path.as_ref();
        if self.model_path.is_some() {
            return Err(PredictorError::Build("model path already set".to_string()));
        }
        if path.as_os_str().is_empty() {
            return Err(PredictorError::Build("model path cannot be empty".to_string()));
        }
        if !path.exists() {
            return Err(PredictorError::Build(format!(
                "model file not found: {}",
                path.display()
            )));
        }
        self.model_path = Some(path.to_string_lossy().to_string());
        Ok(self)
    }

    /// Sets the path of the label decoder artifact (a JSON array of labels)
    ///
    /// # Errors
    /// `Build` if the path is empty, already set, or does not exist.
    pub fn with_labels_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PredictorError> {
        let path = path.as_ref();
        if self.labels_path.is_some() {
            return Err(PredictorError::Build("labels path already set".to_string()));
        }
        if path.as_os_str().is_empty() {
            return Err(PredictorError::Build("labels path cannot be empty".to_string()));
        }
        if !path.exists() {
            return Err(PredictorError::Build(format!(
                "labels file not found: {}",
                path.display()
            )));
        }
        self.labels_path = Some(path.to_string_lossy().to_string());
        Ok(self)
    }

    /// Builds and returns the final Predictor instance
    ///
    /// Loads the label decoder and the ONNX session, and validates that the
    /// model's declared input width matches the symptom vocabulary.
    pub fn build(self) -> Result<Predictor, PredictorError> {
        let model_path = self
            .model_path
            .ok_or_else(|| PredictorError::Build("model path must be set".to_string()))?;
        let labels_path = self
            .labels_path
            .ok_or_else(|| PredictorError::Build("labels path must be set".to_string()))?;

        let decoder = LabelDecoder::from_file(&labels_path).map_err(|e| {
            error!("Failed to load label decoder: {}", e);
            e
        })?;
        info!("Label decoder loaded with {} labels", decoder.len());

        let session = create_session_builder(&self.runtime_config)?
            .commit_from_file(&model_path)?;
        let model = OnnxModel::new(session)?;
        info!("Model loaded from {}", model_path);

        let vocabulary = Arc::new(SymptomVocabulary::new());
        if let Some(width) = model.input_width() {
            if width != vocabulary.len() {
                return Err(PredictorError::Build(format!(
                    "model expects {} features but the vocabulary has {}",
                    width,
                    vocabulary.len()
                )));
            }
        }

        Ok(Predictor::from_parts(
            model_path,
            labels_path,
            Arc::new(model),
            Arc::new(decoder),
            vocabulary,
        ))
    }
}
