//! Decision tree and random forest evaluation
//!
//! Inference-only: trees arrive fully grown inside the artifact and are
//! never refit here. Classification by majority vote across trees.

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ChurnError, Result};

/// Decision tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf node with prediction value
    Leaf { value: f64 },
    /// Internal node with split
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    fn max_feature_idx(&self) -> Option<usize> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split {
                feature_idx,
                left,
                right,
                ..
            } => {
                let mut max = *feature_idx;
                if let Some(idx) = left.max_feature_idx() {
                    max = max.max(idx);
                }
                if let Some(idx) = right.max_feature_idx() {
                    max = max.max(idx);
                }
                Some(max)
            }
        }
    }
}

/// A single fitted decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
}

impl DecisionTree {
    /// Evaluate the tree for every row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        let predictions: Vec<f64> = (0..x.nrows())
            .map(|i| Self::predict_sample(&self.root, &x.row(i).to_vec()))
            .collect();

        Array1::from_vec(predictions)
    }

    fn predict_sample(node: &TreeNode, sample: &[f64]) -> f64 {
        match node {
            TreeNode::Leaf { value } => *value,
            TreeNode::Split {
                feature_idx,
                threshold,
                left,
                right,
            } => {
                if sample[*feature_idx] <= *threshold {
                    Self::predict_sample(left, sample)
                } else {
                    Self::predict_sample(right, sample)
                }
            }
        }
    }
}

/// Random forest classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    /// Number of input columns the forest was fit on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Structural check run once at artifact load: every split must
    /// reference a feature inside the declared schema width, so that
    /// per-request evaluation never indexes out of bounds.
    pub fn validate(&self, n_features: usize) -> Result<()> {
        if self.trees.is_empty() {
            return Err(ChurnError::Artifact(
                "forest contains no trees".to_string(),
            ));
        }

        for (i, tree) in self.trees.iter().enumerate() {
            if let Some(idx) = tree.root.max_feature_idx() {
                if idx >= n_features {
                    return Err(ChurnError::Artifact(format!(
                        "tree {} splits on feature index {} but the schema has {} columns",
                        i, idx, n_features
                    )));
                }
            }
        }

        Ok(())
    }

    /// Predict one class label per row by majority vote across trees.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if self.trees.is_empty() {
            return Err(ChurnError::Prediction(
                "forest contains no trees".to_string(),
            ));
        }

        if x.ncols() != self.n_features {
            return Err(ChurnError::Prediction(format!(
                "expected {} features, got {}",
                self.n_features,
                x.ncols()
            )));
        }

        let all_predictions: Vec<Array1<f64>> =
            self.trees.par_iter().map(|tree| tree.predict(x)).collect();

        // Ordered map so a tied vote always resolves the same way: with
        // equal counts, max_by_key keeps the last entry, the highest class.
        let predictions: Vec<f64> = (0..x.nrows())
            .map(|i| {
                let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
                for preds in &all_predictions {
                    let class = preds[i].round() as i64;
                    *votes.entry(class).or_insert(0) += 1;
                }
                votes
                    .into_iter()
                    .max_by_key(|(_, count)| *count)
                    .map(|(class, _)| class as f64)
                    .unwrap_or(0.0)
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }
}
