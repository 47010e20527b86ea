use ndarray::Array1;
use std::sync::Arc;

use super::decoder::LabelDecoder;
use super::encoder::FeatureEncoder;
use super::error::PredictorError;
use super::model::InferenceModel;
use crate::vocabulary::SymptomVocabulary;

/// A thread-safe disease predictor over a pretrained classifier.
///
/// Everything inside is read-only after construction, so one `Predictor`
/// can be shared across any number of concurrent requests without locking:
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use triage::Predictor;
///
/// let predictor = Predictor::builder()
///     .with_model_file("models/model.onnx")?
///     .with_labels_file("models/labels.json")?
///     .build()?;
///
/// let label = predictor.predict(&["itching".to_string(), "skin_rash".to_string()])?;
/// println!("Predicted disease: {}", label);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Predictor {
    pub model_path: String,
    pub labels_path: String,
    model: Arc<dyn InferenceModel>,
    decoder: Arc<LabelDecoder>,
    encoder: FeatureEncoder,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Predictor>();
    }
};

impl Predictor {
    /// Creates a new PredictorBuilder for fluent construction
    pub fn builder() -> super::builder::PredictorBuilder {
        super::builder::PredictorBuilder::new()
    }

    /// Assembles a predictor from already-constructed parts.
    ///
    /// The builder goes through this after loading the artifacts; it is also
    /// the seam for plugging in a non-ONNX `InferenceModel`.
    pub fn from_parts(
        model_path: String,
        labels_path: String,
        model: Arc<dyn InferenceModel>,
        decoder: Arc<LabelDecoder>,
        vocabulary: Arc<SymptomVocabulary>,
    ) -> Self {
        Self {
            model_path,
            labels_path,
            encoder: FeatureEncoder::new(vocabulary),
            model,
            decoder,
        }
    }

    /// Returns information about the predictor's current state
    pub fn info(&self) -> super::PredictorInfo {
        super::PredictorInfo {
            model_path: self.model_path.clone(),
            labels_path: self.labels_path.clone(),
            num_features: self.encoder.vocabulary().len(),
            num_labels: self.decoder.len(),
        }
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    /// Predicts the disease label for the given symptom names.
    ///
    /// Encodes the symptoms into the model's feature vector and dispatches
    /// to [`predict_vector`](Self::predict_vector).
    ///
    /// # Errors
    /// - `NoSymptoms` if `symptoms` is empty
    /// - `UnknownSymptom` for the first name not in the vocabulary
    /// - `Prediction` / `Model` if inference or label decoding fails
    pub fn predict(&self, symptoms: &[String]) -> Result<String, PredictorError> {
        let features = self.encoder.encode(symptoms)?;
        self.predict_vector(&features)
    }

    /// Runs the classifier on an already-encoded feature vector and decodes
    /// the resulting class index into a disease label.
    pub fn predict_vector(&self, features: &Array1<f32>) -> Result<String, PredictorError> {
        let class_index = self.model.predict_class(features)?;
        let label = self.decoder.decode(class_index)?;
        Ok(label.to_string())
    }
}
