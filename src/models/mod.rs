//! Domain models for prediction requests and results

pub mod feature_vector;
pub mod input;
pub mod prediction;
pub mod types;

pub use feature_vector::FeatureVector;
pub use input::{InputBundle, PatientInput, RawValue};
pub use prediction::{Outcome, PredictionResult};
pub use types::Sex;
