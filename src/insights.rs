//! Illustrative series shown next to the input form
//!
//! These values are static illustrations, not statistics derived from the
//! classifier or its training data. Rendering is left to the presentation
//! layer.

use std::fmt;

use serde::Serialize;

use crate::models::Outcome;

/// Topics with a two-bar illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    Gender,
    ChestPain,
    RestingEcg,
    Slope,
    Thalassemia,
}

impl Topic {
    pub const ALL: [Self; 5] = [
        Self::Gender,
        Self::ChestPain,
        Self::RestingEcg,
        Self::Slope,
        Self::Thalassemia,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::ChestPain => "Chest Pain Types",
            Self::RestingEcg => "Resting ECG",
            Self::Slope => "Slope Types",
            Self::Thalassemia => "Thalassemia Types",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One value per outcome, in the order of [`OUTCOMES`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeSplit {
    pub topic: Topic,
    pub values: [f64; 2],
}

/// Bar order of every split
pub const OUTCOMES: [Outcome; 2] = [Outcome::Absent, Outcome::Present];

#[must_use]
pub const fn outcome_split(topic: Topic) -> OutcomeSplit {
    let values = match topic {
        Topic::Gender | Topic::Thalassemia => [0.2, 0.8],
        Topic::ChestPain | Topic::RestingEcg => [0.4, 0.3],
        Topic::Slope => [0.6, 0.4],
    };
    OutcomeSplit { topic, values }
}

/// Illustrative probability curve over ages 1 to 100, peaking at 50
#[must_use]
pub fn age_curve() -> Vec<(u32, f64)> {
    (1..=100)
        .map(|age| {
            let offset = (f64::from(age) - 50.0) / 10.0;
            (age, 1.0 / (1.0 + offset * offset))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_curve() {
        let curve = age_curve();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].0, 1);
        assert_eq!(curve[49], (50, 1.0));
        assert!((curve[59].1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_outcome_splits() {
        assert_eq!(outcome_split(Topic::Gender).values, [0.2, 0.8]);
        assert_eq!(outcome_split(Topic::Slope).values, [0.6, 0.4]);
        assert_eq!(OUTCOMES[1].message(), "Heart Disease Present");
    }
}
