//! The ordered numeric vector fed to the classifier

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::Feature;

/// Feature values in training order
///
/// Built fresh for every prediction request and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; Feature::COUNT],
}

impl FeatureVector {
    /// Wrap values that are already in training order
    #[must_use]
    pub const fn from_values(values: [f64; Feature::COUNT]) -> Self {
        Self { values }
    }

    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Positional view handed to the classifier
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub const fn values(&self) -> [f64; Feature::COUNT] {
        self.values
    }

    /// Pairs of feature and value in training order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().zip(self.values.iter().copied())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Feature::COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.column(), &value)?;
        }
        map.end()
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; Feature::COUNT] = [
        63.0, 1.0, 0.0, 145.0, 233.0, 1.0, 2.0, 150.0, 0.0, 2.3, 2.0, 0.0, 1.0,
    ];

    #[test]
    fn test_named_access() {
        let vector = FeatureVector::from_values(SAMPLE);
        assert_eq!(vector.get(Feature::Cholesterol), 233.0);
        assert_eq!(vector.get(Feature::StDepression), 2.3);
        assert_eq!(vector.as_slice().len(), Feature::COUNT);
    }

    #[test]
    fn test_serializes_in_training_order() {
        let vector = FeatureVector::from_values(SAMPLE);
        let json = serde_json::to_string(&vector).unwrap();
        assert!(json.starts_with(r#"{"age":63.0,"sex":1.0,"cp":0.0,"trestbps":145.0"#));
        assert!(json.ends_with(r#""ca":0.0,"thal":1.0}"#));
    }

    #[test]
    fn test_display() {
        let vector = FeatureVector::from_values(SAMPLE);
        assert_eq!(
            vector.to_string(),
            "[63, 1, 0, 145, 233, 1, 2, 150, 0, 2.3, 2, 0, 1]"
        );
    }
}
