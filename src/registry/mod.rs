//! Encoding registry for categorical clinical attributes
//!
//! The registry owns the label/code domains of the four categorical fields
//! (chest pain type, resting ECG result, ST slope, thalassemia) and provides
//! lossless translation in both directions. It is built once at startup and
//! never mutated afterwards.
//!
//! Available attributes:
//! - cp: Chest pain type
//! - restecg: Resting electrocardiographic result
//! - slope: Slope of the peak exercise ST segment
//! - thal: Thalassemia type

pub mod attribute;
pub mod tables;

use rustc_hash::FxHashMap;

use crate::error::{PredictorError, Result};

pub use attribute::{Attribute, CategoricalAttribute, Encoding};

/// Bidirectional label/code mappings for every categorical attribute
#[derive(Debug, Clone)]
pub struct EncodingRegistry {
    /// Indexed by [`Attribute::index`]
    attributes: Vec<CategoricalAttribute>,
}

impl EncodingRegistry {
    /// Registry over the code tables the classifier was trained with
    pub fn standard() -> Result<Self> {
        Self::from_tables(
            Attribute::ALL
                .into_iter()
                .map(|attribute| (attribute, tables::standard_table(attribute).to_vec())),
        )
    }

    /// Build a registry from one table per attribute
    ///
    /// Every attribute must be present. A later table for the same attribute
    /// replaces an earlier one.
    pub fn from_tables<I, L>(tables: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Attribute, Vec<(i32, L)>)>,
        L: Into<String>,
    {
        let mut by_attribute: FxHashMap<Attribute, Vec<(i32, L)>> = tables.into_iter().collect();

        let mut attributes = Vec::with_capacity(Attribute::COUNT);
        for attribute in Attribute::ALL {
            let table = by_attribute.remove(&attribute).ok_or_else(|| {
                PredictorError::InvalidEncoding {
                    attribute: attribute.name().to_string(),
                    reason: "no encoding table".to_string(),
                }
            })?;
            let domain = CategoricalAttribute::new(attribute.name(), table)?;
            log::debug!("Registered {} labels for '{}'", domain.len(), attribute);
            attributes.push(domain);
        }

        Ok(Self { attributes })
    }

    /// The domain of a single attribute
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> &CategoricalAttribute {
        &self.attributes[attribute.index()]
    }

    /// Labels in presentation order, for populating a choice control
    #[must_use]
    pub fn labels_for(&self, attribute: Attribute) -> Vec<&str> {
        self.attribute(attribute).labels().collect()
    }

    pub fn code_for(&self, attribute: Attribute, label: &str) -> Result<i32> {
        self.attribute(attribute).code_for(label)
    }

    pub fn label_for(&self, attribute: Attribute, code: i32) -> Result<&str> {
        self.attribute(attribute).label_for(code)
    }

    /// Iterate over all attributes and their domains
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &CategoricalAttribute)> {
        Attribute::ALL.into_iter().zip(self.attributes.iter())
    }
}
