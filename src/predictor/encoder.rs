use ndarray::Array1;
use std::sync::Arc;

use super::error::PredictorError;
use crate::vocabulary::SymptomVocabulary;

/// Turns a set of symptom names into the one-hot feature vector the model
/// was trained on.
///
/// Encoding is a pure function of the vocabulary and the input: the result
/// always has one entry per vocabulary column, with 1.0 at the positions of
/// the requested symptoms and 0.0 everywhere else.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    vocabulary: Arc<SymptomVocabulary>,
}

impl FeatureEncoder {
    pub fn new(vocabulary: Arc<SymptomVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    /// Encodes the given symptom names into a feature vector.
    ///
    /// # Errors
    /// - `NoSymptoms` if the input is empty
    /// - `UnknownSymptom` for the first name that is not in the vocabulary;
    ///   names after it are not inspected
    pub fn encode(&self, symptoms: &[String]) -> Result<Array1<f32>, PredictorError> {
        if symptoms.is_empty() {
            return Err(PredictorError::NoSymptoms);
        }

        let mut features = Array1::zeros(self.vocabulary.len());
        for name in symptoms {
            let index = self
                .vocabulary
                .index_of(name)
                .ok_or_else(|| PredictorError::UnknownSymptom(name.clone()))?;
            features[index] = 1.0;
        }
        Ok(features)
    }
}
