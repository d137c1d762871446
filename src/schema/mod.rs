//! Schema of the classifier input
//!
//! This module defines the fixed set of training columns, the kind of raw
//! value each one accepts and the bounds numeric input must satisfy.

pub mod field;

pub use field::{Bounds, FEATURE_COLUMNS, FLAG_BOUNDS, Feature, FeatureKind};
