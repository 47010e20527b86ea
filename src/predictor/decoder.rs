use std::fs;
use std::path::Path;

use super::error::PredictorError;

/// Maps the model's raw class index back to a human-readable disease label.
///
/// The label order comes from `labels.json`, which is exported together with
/// the model and mirrors the label encoder used at training time.
#[derive(Debug, Clone)]
pub struct LabelDecoder {
    labels: Vec<String>,
}

impl LabelDecoder {
    pub fn from_labels(labels: Vec<String>) -> Result<Self, PredictorError> {
        if labels.is_empty() {
            return Err(PredictorError::Build("label list is empty".into()));
        }
        Ok(Self { labels })
    }

    /// Loads the label list from a JSON array of strings.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PredictorError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            PredictorError::Build(format!("failed to read labels file {:?}: {}", path, e))
        })?;
        let labels: Vec<String> = serde_json::from_slice(&bytes).map_err(|e| {
            PredictorError::Build(format!("failed to parse labels file {:?}: {}", path, e))
        })?;
        Self::from_labels(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Decodes a class index into its label.
    ///
    /// # Errors
    /// `Prediction` if the index is negative or past the end of the label
    /// list, which means the model and the label file are out of sync.
    pub fn decode(&self, class_index: i64) -> Result<&str, PredictorError> {
        usize::try_from(class_index)
            .ok()
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
            .ok_or_else(|| {
                PredictorError::Prediction(format!(
                    "class index {} out of range (0..{})",
                    class_index,
                    self.labels.len()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> LabelDecoder {
        LabelDecoder::from_labels(vec![
            "Fungal infection".to_string(),
            "Allergy".to_string(),
            "GERD".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_decode_in_range() {
        let decoder = decoder();
        assert_eq!(decoder.decode(0).unwrap(), "Fungal infection");
        assert_eq!(decoder.decode(2).unwrap(), "GERD");
    }

    #[test]
    fn test_decode_out_of_range() {
        let decoder = decoder();
        let err = decoder.decode(3).unwrap_err();
        assert!(matches!(err, PredictorError::Prediction(_)));
        assert!(err.to_string().contains("class index 3"));
    }

    #[test]
    fn test_decode_negative_index() {
        let decoder = decoder();
        assert!(matches!(
            decoder.decode(-1),
            Err(PredictorError::Prediction(_))
        ));
    }

    #[test]
    fn test_empty_labels_rejected() {
        assert!(matches!(
            LabelDecoder::from_labels(vec![]),
            Err(PredictorError::Build(_))
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(matches!(
            LabelDecoder::from_file("/nonexistent/labels.json"),
            Err(PredictorError::Build(_))
        ));
    }
}
