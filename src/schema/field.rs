//! Feature definitions for the classifier's training columns
//!
//! The classifier consumes raw positional input, so the order of
//! [`Feature::ALL`] is the order of every emitted feature vector.

use std::fmt;

use crate::error::{PredictorError, Result};
use crate::registry::Attribute;

/// Column names in training order
pub const FEATURE_COLUMNS: [&str; Feature::COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// One of the 13 clinical fields the classifier was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Age in years
    Age,
    /// Sex (1 = male, 0 = female)
    Sex,
    /// Chest pain type
    ChestPain,
    /// Resting blood pressure in mm Hg
    RestingBloodPressure,
    /// Serum cholesterol in mg/dl
    Cholesterol,
    /// Fasting blood sugar > 120 mg/dl
    FastingBloodSugar,
    /// Resting electrocardiographic result
    RestingEcg,
    /// Maximum heart rate achieved
    MaxHeartRate,
    /// Exercise induced angina
    ExerciseAngina,
    /// ST depression induced by exercise relative to rest
    StDepression,
    /// Slope of the peak exercise ST segment
    Slope,
    /// Number of major vessels colored by fluoroscopy
    Vessels,
    /// Thalassemia type
    Thalassemia,
}

/// Inclusive numeric bounds for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    /// Whether only whole numbers are accepted
    pub integral: bool,
}

impl Bounds {
    #[must_use]
    pub const fn integer(min: i32, max: i32) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
            integral: true,
        }
    }

    #[must_use]
    pub const fn decimal(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            integral: false,
        }
    }

    /// Validate a value for `feature`, returning it unchanged
    ///
    /// Out-of-range values are rejected, never clamped. NaN is out of range.
    pub fn check(&self, feature: Feature, value: f64) -> Result<f64> {
        if !(self.min..=self.max).contains(&value) {
            return Err(PredictorError::InvalidRange {
                feature: feature.column(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        if self.integral && value.fract() != 0.0 {
            return Err(PredictorError::NotIntegral {
                feature: feature.column(),
                value,
            });
        }
        Ok(value)
    }
}

/// Binary flags accept exactly 0 or 1
pub const FLAG_BOUNDS: Bounds = Bounds::integer(0, 1);

/// How a raw input value for a feature is turned into a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureKind {
    /// Bounded numeric input
    Numeric(Bounds),
    /// 0/1 flag
    Flag,
    /// Male/Female label
    Gender,
    /// Label resolved through the encoding registry
    Categorical(Attribute),
}

impl FeatureKind {
    /// The kind of raw value this feature expects, for error messages
    #[must_use]
    pub const fn expects(&self) -> &'static str {
        match self {
            Self::Numeric(_) | Self::Flag => "numeric",
            Self::Gender | Self::Categorical(_) => "label",
        }
    }
}

impl Feature {
    pub const COUNT: usize = 13;

    /// All features in training order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Age,
        Self::Sex,
        Self::ChestPain,
        Self::RestingBloodPressure,
        Self::Cholesterol,
        Self::FastingBloodSugar,
        Self::RestingEcg,
        Self::MaxHeartRate,
        Self::ExerciseAngina,
        Self::StDepression,
        Self::Slope,
        Self::Vessels,
        Self::Thalassemia,
    ];

    /// Position of this feature in the vector
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Training column name
    #[must_use]
    pub const fn column(self) -> &'static str {
        FEATURE_COLUMNS[self.index()]
    }

    #[must_use]
    pub const fn kind(self) -> FeatureKind {
        match self {
            Self::Age => FeatureKind::Numeric(Bounds::integer(1, 100)),
            Self::Sex => FeatureKind::Gender,
            Self::ChestPain => FeatureKind::Categorical(Attribute::ChestPain),
            Self::RestingBloodPressure => FeatureKind::Numeric(Bounds::integer(80, 200)),
            Self::Cholesterol => FeatureKind::Numeric(Bounds::integer(100, 600)),
            Self::FastingBloodSugar | Self::ExerciseAngina => FeatureKind::Flag,
            Self::RestingEcg => FeatureKind::Categorical(Attribute::RestingEcg),
            Self::MaxHeartRate => FeatureKind::Numeric(Bounds::integer(70, 220)),
            Self::StDepression => FeatureKind::Numeric(Bounds::decimal(0.0, 6.2)),
            Self::Slope => FeatureKind::Categorical(Attribute::Slope),
            Self::Vessels => FeatureKind::Numeric(Bounds::integer(0, 4)),
            Self::Thalassemia => FeatureKind::Categorical(Attribute::Thalassemia),
        }
    }

    /// Human readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Sex => "Gender",
            Self::ChestPain => "Chest pain type",
            Self::RestingBloodPressure => "Resting blood pressure",
            Self::Cholesterol => "Serum cholesterol",
            Self::FastingBloodSugar => "Fasting blood sugar > 120 mg/dl",
            Self::RestingEcg => "Resting electrocardiographic results",
            Self::MaxHeartRate => "Maximum heart rate achieved",
            Self::ExerciseAngina => "Exercise induced angina",
            Self::StDepression => "ST depression induced by exercise",
            Self::Slope => "Slope of the peak exercise ST segment",
            Self::Vessels => "Number of major vessels colored by fluoroscopy",
            Self::Thalassemia => "Thalassemia",
        }
    }

    /// Look up a feature by its training column name
    pub fn from_column(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|feature| feature.column().eq_ignore_ascii_case(name))
            .ok_or_else(|| PredictorError::UnknownFeature(name.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
