//! Error types for the churn prediction service

use thiserror::Error;

/// Result type alias for churn prediction operations
pub type Result<T> = std::result::Result<T, ChurnError>;

/// Main error type for the service core
#[derive(Error, Debug)]
pub enum ChurnError {
    /// The model artifact is missing, unreadable, corrupt, or carries a
    /// schema that does not match the compiled feature record. Fatal at
    /// startup: the process must not serve without a usable model.
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// The prediction call failed. Deterministic (a code or artifact
    /// problem, never transient), so it is surfaced and not retried.
    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChurnError {
    fn from(err: serde_json::Error) -> Self {
        ChurnError::Serialization(err.to_string())
    }
}
