//! Code tables the classifier was trained with
//!
//! Entries are listed in presentation order.

use super::Attribute;

pub const CHEST_PAIN: [(i32, &str); 4] = [
    (0, "Typical angina"),
    (1, "Atypical angina"),
    (2, "Non-anginal pain"),
    (3, "Asymptomatic"),
];

pub const RESTING_ECG: [(i32, &str); 3] = [
    (0, "Normal"),
    (1, "ST-T wave abnormality"),
    (2, "Left ventricular hypertrophy"),
];

pub const SLOPE: [(i32, &str); 3] = [(0, "Upsloping"), (1, "Flat"), (2, "Downsloping")];

pub const THALASSEMIA: [(i32, &str); 4] = [
    (0, "Normal"),
    (1, "Fixed defect"),
    (2, "Reversible defect"),
    (3, "Unknown"),
];

/// The standard table for an attribute
#[must_use]
pub const fn standard_table(attribute: Attribute) -> &'static [(i32, &'static str)] {
    match attribute {
        Attribute::ChestPain => &CHEST_PAIN,
        Attribute::RestingEcg => &RESTING_ECG,
        Attribute::Slope => &SLOPE,
        Attribute::Thalassemia => &THALASSEMIA,
    }
}
