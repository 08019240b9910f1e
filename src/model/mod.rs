//! Pre-trained churn model
//!
//! The artifact is a serde-serialized JSON object on local disk holding
//! the training schema, the fitted categorical encoders, and the forest
//! itself. Loaded once at startup, validated against the compiled
//! feature record, then shared read-only across requests.

mod artifact;
mod tree;

pub use artifact::ChurnModel;
pub use tree::{DecisionTree, RandomForest, TreeNode};
