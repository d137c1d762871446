//! Common domain type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};

/// Gender as offered by the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male, training code 1
    Male,
    /// Female, training code 0
    Female,
}

impl Sex {
    /// Options in presentation order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Attribute key used in lookup errors
    pub const ATTRIBUTE: &'static str = "sex";

    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Male => 1,
            Self::Female => 0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|sex| sex.label() == label)
            .ok_or_else(|| PredictorError::UnknownLabel {
                attribute: Self::ATTRIBUTE.to_string(),
                label: label.to_string(),
            })
    }

    pub fn from_code(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|sex| sex.code() == code)
            .ok_or_else(|| PredictorError::UnknownCode {
                attribute: Self::ATTRIBUTE.to_string(),
                code,
            })
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
