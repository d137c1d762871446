//! Serialized model artifacts
//!
//! An artifact is a JSON document tagged by `kind`. Every artifact lists the
//! feature names it was trained on; they must match the training columns in
//! order, otherwise the artifact is rejected at load time.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::tree::TreeEnsemble;
use super::{Classifier, ClassifierError, check_feature_count, sigmoid};
use crate::error::{PredictorError, Result};
use crate::schema::{FEATURE_COLUMNS, Feature};
use crate::utils::logging::{log_operation_complete, log_operation_start};

pub(crate) fn default_threshold() -> f64 {
    0.5
}

/// Logistic regression over the raw feature vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Probability at or above which class 1 is predicted
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticModel {
    /// Log-odds of class 1
    pub fn margin(&self, features: &[f64]) -> std::result::Result<f64, ClassifierError> {
        check_feature_count(self.coefficients.len(), features)?;
        let margin = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept;
        if margin.is_finite() {
            Ok(margin)
        } else {
            Err(ClassifierError::NonFiniteScore)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.len() != Feature::COUNT {
            return Err(PredictorError::Artifact(format!(
                "expected {} coefficients, found {}",
                Feature::COUNT,
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PredictorError::Artifact(
                "coefficients must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// A loadable classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Logistic(LogisticModel),
    TreeEnsemble(TreeEnsemble),
}

impl ModelArtifact {
    /// Load and validate an artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        log_operation_start("Loading model artifact", path);
        let start = Instant::now();

        let content = std::fs::read_to_string(path)?;
        let artifact = Self::from_json(&content)?;

        let summary = format!("{}, {} parameters", artifact.kind(), artifact.size());
        log_operation_complete("Loaded model artifact", path, &summary, start.elapsed());
        Ok(artifact)
    }

    /// Parse and validate an artifact
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check the artifact against the training columns and its own structure
    pub fn validate(&self) -> Result<()> {
        check_feature_names(self.feature_names())?;

        let threshold = self.threshold();
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(PredictorError::Artifact(format!(
                "threshold {threshold} must lie strictly between 0 and 1"
            )));
        }

        match self {
            Self::Logistic(model) => model.validate(),
            Self::TreeEnsemble(ensemble) => ensemble.validate(),
        }
    }

    /// The `kind` tag of the artifact
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Logistic(_) => "logistic",
            Self::TreeEnsemble(_) => "tree_ensemble",
        }
    }

    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::Logistic(model) => &model.feature_names,
            Self::TreeEnsemble(ensemble) => &ensemble.feature_names,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Logistic(model) => model.threshold,
            Self::TreeEnsemble(ensemble) => ensemble.threshold,
        }
    }

    /// Number of parameters (coefficients or tree nodes)
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Logistic(model) => model.coefficients.len() + 1,
            Self::TreeEnsemble(ensemble) => ensemble.trees.iter().map(|t| t.nodes.len()).sum(),
        }
    }

    /// Log-odds of class 1
    pub fn margin(&self, features: &[f64]) -> std::result::Result<f64, ClassifierError> {
        match self {
            Self::Logistic(model) => model.margin(features),
            Self::TreeEnsemble(ensemble) => ensemble.margin(features),
        }
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, features: &[f64]) -> std::result::Result<u8, ClassifierError> {
        let probability = sigmoid(self.margin(features)?);
        Ok(u8::from(probability >= self.threshold()))
    }

    fn probability(&self, features: &[f64]) -> std::result::Result<Option<f64>, ClassifierError> {
        Ok(Some(sigmoid(self.margin(features)?)))
    }
}

fn check_feature_names(names: &[String]) -> Result<()> {
    if names.len() != FEATURE_COLUMNS.len() {
        return Err(PredictorError::Artifact(format!(
            "expected {} feature names, found {}",
            FEATURE_COLUMNS.len(),
            names.len()
        )));
    }
    if let Some((position, (found, expected))) = names
        .iter()
        .zip(FEATURE_COLUMNS)
        .enumerate()
        .find(|(_, (found, expected))| found.as_str() != *expected)
    {
        return Err(PredictorError::Artifact(format!(
            "feature {position} is '{found}', expected '{expected}'"
        )));
    }
    Ok(())
}
