use ort::Error as OrtError;
use std::fmt;

/// Represents the different types of errors that can occur while building or
/// querying the disease predictor.
#[derive(Debug)]
pub enum PredictorError {
    /// The request contained no symptoms at all
    NoSymptoms,
    /// The request contained a symptom name outside the vocabulary
    UnknownSymptom(String),
    /// Error occurred while running the model or decoding its output
    Prediction(String),
    /// Error occurred in the ONNX session or tensor plumbing
    Model(String),
    /// Error occurred while loading model artifacts at startup
    Build(String),
}

impl PredictorError {
    /// Whether the error was caused by the caller's input rather than the
    /// service itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NoSymptoms | Self::UnknownSymptom(_))
    }
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSymptoms => write!(f, "No symptoms provided"),
            Self::UnknownSymptom(name) => write!(f, "Invalid symptom: {}", name),
            Self::Prediction(msg) => write!(f, "Prediction error: {}", msg),
            Self::Model(msg) => write!(f, "Model error: {}", msg),
            Self::Build(msg) => write!(f, "Build error: {}", msg),
        }
    }
}

impl std::error::Error for PredictorError {}

impl From<OrtError> for PredictorError {
    fn from(err: OrtError) -> Self {
        PredictorError::Build(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_messages() {
        assert_eq!(PredictorError::NoSymptoms.to_string(), "No symptoms provided");
        assert_eq!(
            PredictorError::UnknownSymptom("not_a_symptom".into()).to_string(),
            "Invalid symptom: not_a_symptom"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(PredictorError::NoSymptoms.is_client_error());
        assert!(PredictorError::UnknownSymptom("x".into()).is_client_error());
        assert!(!PredictorError::Prediction("boom".into()).is_client_error());
        assert!(!PredictorError::Model("boom".into()).is_client_error());
        assert!(!PredictorError::Build("boom".into()).is_client_error());
    }
}
