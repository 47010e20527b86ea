mod decoder;
mod encoder;
mod error;
mod model;
pub mod builder;
mod predictor;

pub use builder::PredictorBuilder;
pub use decoder::LabelDecoder;
pub use encoder::FeatureEncoder;
pub use error::PredictorError;
pub use model::{InferenceModel, OnnxModel};
pub use predictor::Predictor;

/// Information about the current state and configuration of a predictor
#[derive(Debug, Clone)]
pub struct PredictorInfo {
    /// Path to the ONNX model file
    pub model_path: String,
    /// Path to the labels file
    pub labels_path: String,
    /// Number of features (vocabulary columns) the model consumes
    pub num_features: usize,
    /// Number of disease labels the decoder knows
    pub num_labels: usize,
}
