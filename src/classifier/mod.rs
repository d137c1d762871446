//! The binary classifier boundary
//!
//! The assembler only depends on the [`Classifier`] trait, so a loaded model
//! artifact and a test fake are interchangeable. Implementations receive the
//! feature vector positionally, in training order.

pub mod artifact;
pub mod tree;

use std::rc::Rc;
use std::sync::Arc;

pub use artifact::{LogisticModel, ModelArtifact};
pub use tree::{RegressionTree, TreeEnsemble, TreeNode};

/// Failures raised by a classifier while scoring one request
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Input length does not match the model
    #[error("Expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    /// The model produced NaN or an infinite score
    #[error("Model produced a non-finite score")]
    NonFiniteScore,

    /// The model returned something other than 0 or 1
    #[error("Model returned class {0}, expected 0 or 1")]
    InvalidClass(u8),

    /// A tree could not be walked to a leaf
    #[error("Malformed tree {tree}: {reason}")]
    MalformedTree { tree: usize, reason: String },

    /// Any other failure inside the model
    #[error("{0}")]
    Failed(String),
}

/// A pre-trained binary classifier
pub trait Classifier {
    /// Predict class 0 (no disease) or 1 (disease present)
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError>;

    /// Probability of class 1, if the model exposes one
    fn probability(&self, _features: &[f64]) -> Result<Option<f64>, ClassifierError> {
        Ok(None)
    }
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        (**self).predict(features)
    }

    fn probability(&self, features: &[f64]) -> Result<Option<f64>, ClassifierError> {
        (**self).probability(features)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        (**self).predict(features)
    }

    fn probability(&self, features: &[f64]) -> Result<Option<f64>, ClassifierError> {
        (**self).probability(features)
    }
}

impl<C: Classifier + ?Sized> Classifier for Rc<C> {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        (**self).predict(features)
    }

    fn probability(&self, features: &[f64]) -> Result<Option<f64>, ClassifierError> {
        (**self).probability(features)
    }
}

impl<C: Classifier + ?Sized> Classifier for Arc<C> {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        (**self).predict(features)
    }

    fn probability(&self, features: &[f64]) -> Result<Option<f64>, ClassifierError> {
        (**self).probability(features)
    }
}

/// Logistic function
#[must_use]
pub fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

pub(crate) fn check_feature_count(expected: usize, features: &[f64]) -> Result<(), ClassifierError> {
    if features.len() == expected {
        Ok(())
    } else {
        Err(ClassifierError::FeatureCount {
            expected,
            actual: features.len(),
        })
    }
}
