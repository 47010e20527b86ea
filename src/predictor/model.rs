use ndarray::{Array1, Array2};
use ort::session::Session;
use ort::value::Tensor;
use std::collections::HashMap;

use super::error::PredictorError;

/// Single-sample class prediction over a fixed-width feature vector.
///
/// The production implementation wraps an ONNX Runtime session; tests swap
/// in stub models so the surrounding service can be exercised without model
/// artifacts on disk.
pub trait InferenceModel: Send + Sync + std::fmt::Debug {
    /// Runs the classifier on one feature vector and returns the raw class
    /// index.
    fn predict_class(&self, features: &Array1<f32>) -> Result<i64, PredictorError>;

    /// The input width the model declares, when its input shape is static.
    fn input_width(&self) -> Option<usize>;
}

/// An `InferenceModel` backed by an ONNX Runtime session.
///
/// The session is expected to take a single `[1, N]` f32 input and to
/// produce the predicted class index as its first output, the shape emitted
/// by the standard sklearn-to-ONNX converters.
#[derive(Debug)]
pub struct OnnxModel {
    session: Session,
    input_name: String,
    input_width: Option<usize>,
}

impl OnnxModel {
    /// Wraps a loaded session, capturing its input name and declared width.
    ///
    /// # Errors
    /// `Model` if the session has no inputs or no outputs.
    pub fn new(session: Session) -> Result<Self, PredictorError> {
        let input = session
            .inputs
            .first()
            .ok_or_else(|| PredictorError::Model("model has no input tensors".into()))?;
        if session.outputs.is_empty() {
            return Err(PredictorError::Model("model has no output tensors".into()));
        }

        let input_name = input.name.clone();
        // Dynamic batch dims show up as -1 and simply leave the width unknown.
        let input_width = input
            .input_type
            .tensor_dimensions()
            .and_then(|dims| dims.get(1))
            .and_then(|&dim| usize::try_from(dim).ok());

        Ok(Self {
            session,
            input_name,
            input_width,
        })
    }
}

impl InferenceModel for OnnxModel {
    fn predict_class(&self, features: &Array1<f32>) -> Result<i64, PredictorError> {
        let input_array = Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| PredictorError::Model(format!("failed to create input array: {}", e)))?;
        let input_dyn = input_array.into_dyn();
        let input_view = input_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(&input_view)
                .map_err(|e| PredictorError::Model(format!("failed to create input tensor: {}", e)))?,
        );

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| PredictorError::Prediction(format!("failed to run model: {}", e)))?;
        let class_tensor = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| PredictorError::Prediction(format!("failed to extract class output: {}", e)))?;

        class_tensor
            .iter()
            .copied()
            .next()
            .ok_or_else(|| PredictorError::Prediction("model returned an empty class tensor".into()))
    }

    fn input_width(&self) -> Option<usize> {
        self.input_width
    }
}
