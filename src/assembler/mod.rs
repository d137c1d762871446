//! Feature assembly and prediction
//!
//! The assembler turns a bundle of raw user input into the ordered feature
//! vector the classifier was trained on and forwards it, unmodified, to an
//! injected classifier. Numeric input outside its declared bounds is rejected
//! rather than clamped, and categorical labels are resolved through the
//! encoding registry. Any failure rejects the whole request before the
//! classifier is called.

use std::sync::Arc;

use crate::classifier::{Classifier, ClassifierError};
use crate::error::{PredictorError, Result};
use crate::models::{FeatureVector, InputBundle, Outcome, PredictionResult, RawValue, Sex};
use crate::registry::EncodingRegistry;
use crate::schema::{FLAG_BOUNDS, Feature, FeatureKind};
use crate::utils::logging::log_rejection;

/// Assembles feature vectors and runs the classifier over them
///
/// Both the registry and the classifier are read-only after construction.
#[derive(Debug, Clone)]
pub struct FeatureAssembler<C> {
    registry: Arc<EncodingRegistry>,
    classifier: C,
}

impl<C> FeatureAssembler<C> {
    #[must_use]
    pub fn new(registry: Arc<EncodingRegistry>, classifier: C) -> Self {
        Self {
            registry,
            classifier,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &EncodingRegistry {
        &self.registry
    }

    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Build the feature vector for a bundle
    ///
    /// The output order is the training order regardless of how the bundle
    /// was populated.
    pub fn assemble(&self, input: &InputBundle) -> Result<FeatureVector> {
        let mut values = [0.0; Feature::COUNT];
        for feature in Feature::ALL {
            let raw = input
                .get(feature)
                .ok_or(PredictorError::MissingField(feature.column()))?;
            values[feature.index()] = self.encode(feature, raw)?;
        }

        let vector = FeatureVector::from_values(values);
        log::debug!("Assembled feature vector {vector}");
        Ok(vector)
    }

    /// Turn one raw value into its numeric training value
    pub fn encode(&self, feature: Feature, raw: &RawValue) -> Result<f64> {
        match (feature.kind(), raw) {
            (FeatureKind::Numeric(bounds), RawValue::Number(value)) => {
                bounds.check(feature, *value)
            }
            (FeatureKind::Flag, RawValue::Number(value)) => FLAG_BOUNDS.check(feature, *value),
            (FeatureKind::Gender, RawValue::Label(label)) => {
                Sex::from_label(label).map(|sex| f64::from(sex.code()))
            }
            (FeatureKind::Categorical(attribute), RawValue::Label(label)) => self
                .registry
                .code_for(attribute, label)
                .map(f64::from),
            (kind, _) => Err(PredictorError::WrongValueKind {
                feature: feature.column(),
                expected: kind.expects(),
            }),
        }
    }
}

impl<C: Classifier> FeatureAssembler<C> {
    /// Assemble a vector from raw input and classify it
    pub fn predict(&self, input: &InputBundle) -> Result<PredictionResult> {
        self.predict_with_vector(input).map(|(_, result)| result)
    }

    /// Like [`FeatureAssembler::predict`], also returning the assembled vector
    ///
    /// A rejected request is logged as a warning before the error is returned.
    pub fn predict_with_vector(
        &self,
        input: &InputBundle,
    ) -> Result<(FeatureVector, PredictionResult)> {
        let vector = self.assemble(input).inspect_err(|err| {
            log_rejection("Rejected prediction request", err);
        })?;
        let result = self.predict_vector(&vector).inspect_err(|err| {
            log_rejection("Classifier failed", err);
        })?;
        Ok((vector, result))
    }

    /// Classify an already assembled vector
    pub fn predict_vector(&self, vector: &FeatureVector) -> Result<PredictionResult> {
        let features = vector.as_slice();

        let class = self.classifier.predict(features)?;
        let outcome = Outcome::from_class(class).ok_or(ClassifierError::InvalidClass(class))?;

        let mut result = PredictionResult::new(outcome);
        if let Some(probability) = self.classifier.probability(features)? {
            if !(0.0..=1.0).contains(&probability) {
                return Err(ClassifierError::Failed(format!(
                    "probability {probability} is outside [0, 1]"
                ))
                .into());
            }
            result = result.with_probability(probability);
        }

        log::debug!("Prediction for {vector}: {outcome}");
        Ok(result)
    }
}
