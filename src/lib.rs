//! Churn prediction inference service
//!
//! Wraps a pre-trained subscriber churn classifier behind a single HTTP
//! endpoint. Per request the flow is strictly linear: validate the body,
//! derive the engineered features with the training-time formulas,
//! assemble the fixed-order feature record, and run the forest.
//!
//! # Modules
//!
//! - [`features`] - Request schema and feature derivation
//! - [`model`] - Artifact loading, categorical encoding, forest evaluation
//! - [`server`] - HTTP server exposing the predict endpoint
//! - [`error`] - Error taxonomy

pub mod error;
pub mod features;
pub mod model;
pub mod server;

pub use error::{ChurnError, Result};
