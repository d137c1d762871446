//! Raw user input
//!
//! [`InputBundle`] is the generic, unordered form of a request: one raw value
//! per feature, keyed by feature. [`PatientInput`] is the typed form the input
//! screen fills in, with the same defaults the form starts from.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::PredictorError;
use crate::schema::Feature;

/// A raw value as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Slider or flag value
    Number(f64),
    /// Selected label
    Label(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// Raw values keyed by feature, in no particular order
///
/// Deserializes from a JSON object keyed by training column names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, RawValue>")]
pub struct InputBundle {
    values: FxHashMap<Feature, RawValue>,
}

impl InputBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a feature, returning the value it replaces
    pub fn insert(&mut self, feature: Feature, value: impl Into<RawValue>) -> Option<RawValue> {
        self.values.insert(feature, value.into())
    }

    /// Builder-style [`InputBundle::insert`]
    #[must_use]
    pub fn with(mut self, feature: Feature, value: impl Into<RawValue>) -> Self {
        self.insert(feature, value);
        self
    }

    #[must_use]
    pub fn get(&self, feature: Feature) -> Option<&RawValue> {
        self.values.get(&feature)
    }

    pub fn remove(&mut self, feature: Feature) -> Option<RawValue> {
        self.values.remove(&feature)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Feature, RawValue)> for InputBundle {
    fn from_iter<I: IntoIterator<Item = (Feature, RawValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, RawValue>> for InputBundle {
    type Error = PredictorError;

    fn try_from(map: BTreeMap<String, RawValue>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(name, value)| Feature::from_column(&name).map(|feature| (feature, value)))
            .collect()
    }
}

/// The typed input form
///
/// Every field must be present when read from JSON. Numbers are kept as
/// entered so the assembler applies the range and integrality checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatientInput {
    pub age: f64,
    pub sex: String,
    #[serde(alias = "cp")]
    pub chest_pain: String,
    #[serde(alias = "trestbps")]
    pub resting_blood_pressure: f64,
    #[serde(alias = "chol")]
    pub cholesterol: f64,
    #[serde(alias = "fbs")]
    pub fasting_blood_sugar: f64,
    #[serde(alias = "restecg")]
    pub resting_ecg: String,
    #[serde(alias = "thalach")]
    pub max_heart_rate: f64,
    #[serde(alias = "exang")]
    pub exercise_angina: f64,
    #[serde(alias = "oldpeak")]
    pub st_depression: f64,
    pub slope: String,
    #[serde(alias = "ca")]
    pub vessels: f64,
    #[serde(alias = "thal")]
    pub thalassemia: String,
}

/// Values the form starts from
impl Default for PatientInput {
    fn default() -> Self {
        Self {
            age: 50.0,
            sex: "Male".to_string(),
            chest_pain: "Typical angina".to_string(),
            resting_blood_pressure: 120.0,
            cholesterol: 200.0,
            fasting_blood_sugar: 0.0,
            resting_ecg: "Normal".to_string(),
            max_heart_rate: 150.0,
            exercise_angina: 0.0,
            st_depression: 0.0,
            slope: "Upsloping".to_string(),
            vessels: 0.0,
            thalassemia: "Normal".to_string(),
        }
    }
}

impl PatientInput {
    /// Parse a complete form submission
    pub fn from_json(json: &str) -> Result<Self, PredictorError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn to_bundle(&self) -> InputBundle {
        InputBundle::new()
            .with(Feature::Age, self.age)
            .with(Feature::Sex, self.sex.as_str())
            .with(Feature::ChestPain, self.chest_pain.as_str())
            .with(Feature::RestingBloodPressure, self.resting_blood_pressure)
            .with(Feature::Cholesterol, self.cholesterol)
            .with(Feature::FastingBloodSugar, self.fasting_blood_sugar)
            .with(Feature::RestingEcg, self.resting_ecg.as_str())
            .with(Feature::MaxHeartRate, self.max_heart_rate)
            .with(Feature::ExerciseAngina, self.exercise_angina)
            .with(Feature::StDepression, self.st_depression)
            .with(Feature::Slope, self.slope.as_str())
            .with(Feature::Vessels, self.vessels)
            .with(Feature::Thalassemia, self.thalassemia.as_str())
    }
}

impl From<&PatientInput> for InputBundle {
    fn from(input: &PatientInput) -> Self {
        input.to_bundle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_from_json() {
        let bundle: InputBundle =
            serde_json::from_str(r#"{"age": 63, "cp": "Typical angina", "oldpeak": 2.3}"#).unwrap();
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.get(Feature::Age), Some(&RawValue::Number(63.0)));
        assert_eq!(
            bundle.get(Feature::ChestPain),
            Some(&RawValue::Label("Typical angina".to_string()))
        );
        assert_eq!(bundle.get(Feature::StDepression), Some(&RawValue::Number(2.3)));
    }

    #[test]
    fn test_bundle_rejects_unknown_column() {
        let result: Result<InputBundle, _> = serde_json::from_str(r#"{"age": 63, "bmi": 31}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Unknown feature 'bmi'"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut bundle = InputBundle::new().with(Feature::Age, 40);
        let previous = bundle.insert(Feature::Age, 41);
        assert_eq!(previous, Some(RawValue::Number(40.0)));
        assert_eq!(bundle.get(Feature::Age), Some(&RawValue::Number(41.0)));
    }

    #[test]
    fn test_default_patient_covers_every_feature() {
        let bundle = PatientInput::default().to_bundle();
        assert_eq!(bundle.len(), Feature::COUNT);
        for feature in Feature::ALL {
            assert!(bundle.get(feature).is_some(), "missing {feature}");
        }
        assert_eq!(bundle.get(Feature::MaxHeartRate), Some(&RawValue::Number(150.0)));
    }

    const REFERENCE_FORM: &str = r#"{
        "age": 63, "sex": "Male", "cp": "Typical angina", "trestbps": 145,
        "chol": 233, "fbs": 1, "restecg": "Left ventricular hypertrophy",
        "thalach": 150, "exang": 0, "oldpeak": 2.3, "slope": "Downsloping",
        "ca": 0, "thal": "Fixed defect"
    }"#;

    #[test]
    fn test_patient_from_json_with_column_aliases() {
        let input = PatientInput::from_json(REFERENCE_FORM).unwrap();
        assert_eq!(input.age, 63.0);
        assert_eq!(input.chest_pain, "Typical angina");
        assert_eq!(input.max_heart_rate, 150.0);
        assert_eq!(input.st_depression, 2.3);
    }

    #[test]
    fn test_patient_missing_field_is_rejected() {
        let json = REFERENCE_FORM.replace(r#""chol": 233,"#, "");
        let err = PatientInput::from_json(&json).unwrap_err();
        assert!(matches!(&err, PredictorError::Json(_)));
        assert!(err.to_string().contains("missing field `cholesterol`"));
    }

    #[test]
    fn test_patient_unknown_key_is_rejected() {
        let json = REFERENCE_FORM.replace(
            r#""cp": "Typical angina""#,
            r#""chest_pain_type": "Asymptomatic""#,
        );
        let err = PatientInput::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("unknown field `chest_pain_type`"));
    }

    #[test]
    fn test_patient_keeps_out_of_range_numbers() {
        let json = REFERENCE_FORM
            .replace(r#""age": 63"#, r#""age": -5"#)
            .replace(r#""fbs": 1"#, r#""fbs": 256"#);
        let bundle = PatientInput::from_json(&json).unwrap().to_bundle();
        assert_eq!(bundle.get(Feature::Age), Some(&RawValue::Number(-5.0)));
        assert_eq!(bundle.get(Feature::FastingBloodSugar), Some(&RawValue::Number(256.0)));
    }
}
