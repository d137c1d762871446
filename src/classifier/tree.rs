//! Gradient boosted regression tree ensembles
//!
//! Each tree is a flat node list rooted at index 0. A split sends a sample
//! left when `x[feature] < threshold` and right otherwise. The ensemble margin
//! is `base_score` plus the sum of the reached leaves.

use serde::{Deserialize, Serialize};

use super::artifact::default_threshold;
use super::{ClassifierError, check_feature_count};
use crate::error::{PredictorError, Result};
use crate::schema::Feature;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Walk the tree to a leaf
    ///
    /// A walk never takes more steps than there are nodes, so a tree with a
    /// cycle fails instead of looping.
    pub fn evaluate(&self, tree: usize, features: &[f64]) -> std::result::Result<f64, ClassifierError> {
        let mut idx = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { leaf }) => return Ok(*leaf),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).ok_or_else(|| {
                        ClassifierError::MalformedTree {
                            tree,
                            reason: format!("split on missing feature {feature}"),
                        }
                    })?;
                    idx = if *value < *threshold { *left } else { *right };
                }
                None => {
                    return Err(ClassifierError::MalformedTree {
                        tree,
                        reason: format!("no node {idx}"),
                    });
                }
            }
        }
        Err(ClassifierError::MalformedTree {
            tree,
            reason: "no leaf reached".to_string(),
        })
    }

    fn validate(&self, tree: usize) -> Result<()> {
        let invalid = |reason: String| PredictorError::Artifact(format!("tree {tree}: {reason}"));

        if self.nodes.is_empty() {
            return Err(invalid("no nodes".to_string()));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Leaf { leaf } if !leaf.is_finite() => {
                    return Err(invalid(format!("node {idx} has a non-finite leaf")));
                }
                TreeNode::Leaf { .. } => {}
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= Feature::COUNT {
                        return Err(invalid(format!(
                            "node {idx} splits on unknown feature {feature}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(format!("node {idx} has a non-finite threshold")));
                    }
                    // Children must point forward so every walk terminates
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(invalid(format!(
                                "node {idx} has invalid child {child}"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Sum of regression trees squashed through the logistic function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub feature_names: Vec<String>,
    /// Initial margin (log-odds) before any tree is added
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<RegressionTree>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl TreeEnsemble {
    /// Log-odds of class 1
    pub fn margin(&self, features: &[f64]) -> std::result::Result<f64, ClassifierError> {
        check_feature_count(self.feature_names.len(), features)?;
        let mut margin = self.base_score;
        for (idx, tree) in self.trees.iter().enumerate() {
            margin += tree.evaluate(idx, features)?;
        }
        if margin.is_finite() {
            Ok(margin)
        } else {
            Err(ClassifierError::NonFiniteScore)
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(PredictorError::Artifact("ensemble has no trees".to_string()));
        }
        if !self.base_score.is_finite() {
            return Err(PredictorError::Artifact(
                "base score must be finite".to_string(),
            ));
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(idx, tree)| tree.validate(idx))
    }
}
