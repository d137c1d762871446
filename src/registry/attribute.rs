//! Categorical attributes and their label/code domains

use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{PredictorError, Result};

/// The categorical clinical fields that carry a label/code domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Chest pain type (`cp`)
    ChestPain,
    /// Resting electrocardiographic result (`restecg`)
    RestingEcg,
    /// Slope of the peak exercise ST segment (`slope`)
    Slope,
    /// Thalassemia type (`thal`)
    Thalassemia,
}

impl Attribute {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [
        Self::ChestPain,
        Self::RestingEcg,
        Self::Slope,
        Self::Thalassemia,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Training column name, used as the attribute key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChestPain => "cp",
            Self::RestingEcg => "restecg",
            Self::Slope => "slope",
            Self::Thalassemia => "thal",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ChestPain => "Chest Pain",
            Self::RestingEcg => "Resting ECG",
            Self::Slope => "Slope",
            Self::Thalassemia => "Thalassemia",
        }
    }

    /// Resolve an attribute from its key or a descriptive alias
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "cp" | "chest_pain" | "chest pain" => Some(Self::ChestPain),
            "restecg" | "resting_ecg" | "resting ecg" => Some(Self::RestingEcg),
            "slope" => Some(Self::Slope),
            "thal" | "thalassemia" => Some(Self::Thalassemia),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One member of a categorical domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Numeric training code
    pub code: i32,
    /// Human readable label
    pub label: String,
}

/// A categorical domain with lookups in both directions
///
/// Entries live in a single arena in presentation order; the two indexes
/// map codes and labels to positions in it.
#[derive(Debug, Clone)]
pub struct CategoricalAttribute {
    name: String,
    entries: Vec<Encoding>,
    by_code: FxHashMap<i32, usize>,
    by_label: FxHashMap<String, usize>,
}

impl CategoricalAttribute {
    /// Build a domain, rejecting empty tables, blank labels and duplicates
    pub fn new<I, L>(name: impl Into<String>, table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, L)>,
        L: Into<String>,
    {
        let name = name.into();
        let entries: Vec<Encoding> = table
            .into_iter()
            .map(|(code, label)| Encoding {
                code,
                label: label.into(),
            })
            .collect();

        let invalid = |reason: String| PredictorError::InvalidEncoding {
            attribute: name.clone(),
            reason,
        };

        if entries.is_empty() {
            return Err(invalid("domain has no entries".to_string()));
        }
        if entries.iter().any(|entry| entry.label.trim().is_empty()) {
            return Err(invalid("blank label".to_string()));
        }
        if let Some(code) = entries.iter().map(|entry| entry.code).duplicates().next() {
            return Err(invalid(format!("duplicate code {code}")));
        }
        if let Some(label) = entries
            .iter()
            .map(|entry| entry.label.as_str())
            .duplicates()
            .next()
        {
            return Err(invalid(format!("duplicate label '{label}'")));
        }

        let by_code = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.code, idx))
            .collect();
        let by_label = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.label.clone(), idx))
            .collect();

        Ok(Self {
            name,
            entries,
            by_code,
            by_label,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in presentation order
    #[must_use]
    pub fn entries(&self) -> &[Encoding] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in presentation order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }

    pub fn code_for(&self, label: &str) -> Result<i32> {
        self.by_label
            .get(label)
            .map(|&idx| self.entries[idx].code)
            .ok_or_else(|| PredictorError::UnknownLabel {
                attribute: self.name.clone(),
                label: label.to_string(),
            })
    }

    pub fn label_for(&self, code: i32) -> Result<&str> {
        self.by_code
            .get(&code)
            .map(|&idx| self.entries[idx].label.as_str())
            .ok_or_else(|| PredictorError::UnknownCode {
                attribute: self.name.clone(),
                code,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_from_name() {
        assert_eq!(Attribute::from_name("CP"), Some(Attribute::ChestPain));
        assert_eq!(Attribute::from_name("thalassemia"), Some(Attribute::Thalassemia));
        assert_eq!(Attribute::from_name("resting_ecg"), Some(Attribute::RestingEcg));
        assert_eq!(Attribute::from_name("ca"), None);
    }

    #[test]
    fn test_lookup_both_directions() {
        let attr = CategoricalAttribute::new("grade", [(5, "Low"), (7, "High")]).unwrap();
        assert_eq!(attr.code_for("High").unwrap(), 7);
        assert_eq!(attr.label_for(5).unwrap(), "Low");
        assert_eq!(attr.labels().collect::<Vec<_>>(), vec!["Low", "High"]);
        assert_eq!(attr.codes().collect::<Vec<_>>(), vec![5, 7]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let attr = CategoricalAttribute::new("grade", [(0, "Low")]).unwrap();
        assert!(matches!(
            attr.code_for("low"),
            Err(PredictorError::UnknownLabel { attribute, label }) if attribute == "grade" && label == "low"
        ));
    }

    #[test]
    fn test_rejects_duplicate_code() {
        let err = CategoricalAttribute::new("grade", [(0, "Low"), (0, "High")]).unwrap_err();
        assert!(matches!(err, PredictorError::InvalidEncoding { reason, .. } if reason == "duplicate code 0"));
    }

    #[test]
    fn test_rejects_duplicate_label() {
        let err = CategoricalAttribute::new("grade", [(0, "Low"), (1, "Low")]).unwrap_err();
        assert!(matches!(err, PredictorError::InvalidEncoding { reason, .. } if reason.contains("'Low'")));
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        let empty: [(i32, &str); 0] = [];
        assert!(CategoricalAttribute::new("grade", empty).is_err());
        assert!(CategoricalAttribute::new("grade", [(0, "  ")]).is_err());
    }
}
