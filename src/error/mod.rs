//! Error handling for the heart disease predictor.

use std::io;

use crate::classifier::ClassifierError;

/// Specialized error type for encoding, assembly and prediction
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// A label is not a member of the attribute's domain
    #[error("Unknown label '{label}' for attribute '{attribute}'")]
    UnknownLabel { attribute: String, label: String },

    /// A code is not a member of the attribute's domain
    #[error("Unknown code {code} for attribute '{attribute}'")]
    UnknownCode { attribute: String, code: i32 },

    /// A numeric value lies outside its declared bounds
    #[error("Value {value} for '{feature}' is outside the accepted range [{min}, {max}]")]
    InvalidRange {
        feature: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A whole-number field received a fractional value
    #[error("Value {value} for '{feature}' must be a whole number")]
    NotIntegral { feature: &'static str, value: f64 },

    /// The input bundle has no value for a required feature
    #[error("Missing value for feature '{0}'")]
    MissingField(&'static str),

    /// A label was supplied where a number is expected, or the reverse
    #[error("Feature '{feature}' expects a {expected} value")]
    WrongValueKind {
        feature: &'static str,
        expected: &'static str,
    },

    /// The input names a feature the classifier was not trained on
    #[error("Unknown feature '{0}'")]
    UnknownFeature(String),

    /// An encoding table is not a valid bidirectional mapping
    #[error("Invalid encoding for '{attribute}': {reason}")]
    InvalidEncoding { attribute: String, reason: String },

    /// The external classifier failed
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// The model artifact is malformed
    #[error("Model artifact error: {0}")]
    Artifact(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PredictorError {
    /// Whether this error was caused by the request itself rather than the model
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownLabel { .. }
                | Self::UnknownCode { .. }
                | Self::InvalidRange { .. }
                | Self::NotIntegral { .. }
                | Self::MissingField(_)
                | Self::WrongValueKind { .. }
                | Self::UnknownFeature(_)
        )
    }
}

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;
