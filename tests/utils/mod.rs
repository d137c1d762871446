//! Shared helpers for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Arc;

use heart_predict::{
    Classifier, ClassifierError, EncodingRegistry, Feature, InputBundle, RawValue,
};

/// Training-order vector for the reference patient
pub const REFERENCE_VECTOR: [f64; Feature::COUNT] = [
    63.0, 1.0, 0.0, 145.0, 233.0, 1.0, 2.0, 150.0, 0.0, 2.3, 2.0, 0.0, 1.0,
];

/// Raw input for the reference patient, in declared order
#[must_use]
pub fn reference_pairs() -> Vec<(Feature, RawValue)> {
    vec![
        (Feature::Age, 63.into()),
        (Feature::Sex, "Male".into()),
        (Feature::ChestPain, "Typical angina".into()),
        (Feature::RestingBloodPressure, 145.into()),
        (Feature::Cholesterol, 233.into()),
        (Feature::FastingBloodSugar, 1.into()),
        (Feature::RestingEcg, "Left ventricular hypertrophy".into()),
        (Feature::MaxHeartRate, 150.into()),
        (Feature::ExerciseAngina, 0.into()),
        (Feature::StDepression, 2.3.into()),
        (Feature::Slope, "Downsloping".into()),
        (Feature::Vessels, 0.into()),
        (Feature::Thalassemia, "Fixed defect".into()),
    ]
}

#[must_use]
pub fn reference_bundle() -> InputBundle {
    reference_pairs().into_iter().collect()
}

#[must_use]
pub fn standard_registry() -> Arc<EncodingRegistry> {
    Arc::new(EncodingRegistry::standard().expect("standard tables are valid"))
}

/// Returns a fixed class and records every vector it receives
#[derive(Debug, Default)]
pub struct RecordingClassifier {
    pub class: u8,
    pub probability: Option<f64>,
    pub calls: RefCell<Vec<Vec<f64>>>,
}

impl RecordingClassifier {
    #[must_use]
    pub fn returning(class: u8) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Classifier for RecordingClassifier {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        self.calls.borrow_mut().push(features.to_vec());
        Ok(self.class)
    }

    fn probability(&self, _features: &[f64]) -> Result<Option<f64>, ClassifierError> {
        Ok(self.probability)
    }
}

/// Fails every prediction, like a model whose artifact is corrupt
#[derive(Debug, Default)]
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        Err(ClassifierError::FeatureCount {
            expected: 14,
            actual: features.len(),
        })
    }
}
