//! Error types for the server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::ChurnError;

/// Request-level failures surfaced as HTTP responses.
///
/// Body validation (missing or mistyped fields) is handled by the
/// `Json` extractor's own 422 rejection before a handler runs, so the
/// variants here cover only post-validation failures.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ChurnError> for ServerError {
    fn from(err: ChurnError) -> Self {
        match err {
            ChurnError::Prediction(msg) => ServerError::Prediction(msg),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Prediction(msg) => {
                tracing::error!(detail = %msg, "Prediction error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Prediction failed. Check server logs for details.".to_string(),
                )
            }
            ServerError::Internal(msg) => {
                tracing::error!(detail = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": true,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
