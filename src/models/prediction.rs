//! Prediction results

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary classifier outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Class 0
    Absent,
    /// Class 1
    Present,
}

impl Outcome {
    /// Convert a raw class into an outcome
    #[must_use]
    pub const fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            _ => None,
        }
    }

    #[must_use]
    pub const fn class(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
        }
    }

    /// Message shown to the user
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Absent => "No Heart Disease",
            Self::Present => "Heart Disease Present",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Result of a single prediction request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub outcome: Outcome,
    /// Probability of class 1, when the classifier reports one
    pub probability: Option<f64>,
}

impl PredictionResult {
    #[must_use]
    pub const fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            probability: None,
        }
    }

    #[must_use]
    pub const fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    #[must_use]
    pub fn is_disease_present(&self) -> bool {
        self.outcome == Outcome::Present
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prediction: {}", self.outcome)?;
        if let Some(probability) = self.probability {
            write!(f, " (p = {probability:.3})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Absent));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Present));
        assert_eq!(Outcome::from_class(2), None);
    }

    #[test]
    fn test_display() {
        let result = PredictionResult::new(Outcome::Present);
        assert_eq!(result.to_string(), "Prediction: Heart Disease Present");
        assert!(result.is_disease_present());

        let result = PredictionResult::new(Outcome::Absent).with_probability(0.1234);
        assert_eq!(result.to_string(), "Prediction: No Heart Disease (p = 0.123)");
    }
}
