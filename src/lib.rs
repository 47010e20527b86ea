//! A symptom-to-disease prediction service backed by a pretrained ONNX
//! classifier.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use triage::Predictor;
//!
//! let predictor = Predictor::builder()
//!     .with_model_file("models/model.onnx")?
//!     .with_labels_file("models/labels.json")?
//!     .build()?;
//!
//! let label = predictor.predict(&["itching".to_string(), "skin_rash".to_string()])?;
//! println!("Predicted disease: {}", label);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The predictor is read-only after construction and can be shared across
//! threads using `Arc`; the HTTP server in [`server`] hands one instance to
//! every worker through `actix_web::web::Data`.

pub mod artifacts;
pub mod predictor;
mod runtime;
pub mod server;
pub mod vocabulary;

pub use artifacts::{ArtifactError, ArtifactStore, Manifest};
pub use predictor::{
    FeatureEncoder, InferenceModel, LabelDecoder, OnnxModel, Predictor, PredictorBuilder,
    PredictorError, PredictorInfo,
};
pub use runtime::{create_session_builder, OptLevel, RuntimeConfig};
pub use server::{startup, AppState, ServerConfig};
pub use vocabulary::SymptomVocabulary;

pub fn init_logger() {
    env_logger::init();
}
