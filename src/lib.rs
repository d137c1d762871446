//! Categorical encoding and feature assembly for a pre-trained heart disease
//! classifier.
//!
//! User input is resolved through an [`EncodingRegistry`], assembled into a
//! [`FeatureVector`] in training order by a [`FeatureAssembler`] and handed to
//! an injected [`Classifier`].

pub mod assembler;
pub mod classifier;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod registry;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use assembler::FeatureAssembler;
pub use classifier::{Classifier, ClassifierError, ModelArtifact};
pub use config::PredictorConfig;
pub use error::{PredictorError, Result};
pub use models::{FeatureVector, InputBundle, Outcome, PatientInput, PredictionResult, RawValue, Sex};
pub use registry::{Attribute, CategoricalAttribute, EncodingRegistry};
pub use schema::{FEATURE_COLUMNS, Feature};
