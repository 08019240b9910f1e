//! HTTP request handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::features::{FeatureRecord, PredictionRequest};

use super::error::{Result, ServerError};
use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub churn_prediction: i64,
}

/// Predict churn for a single subscriber.
///
/// Field presence and type validation happen in the `Json` extractor: a
/// missing or mistyped field is rejected with 422 before this handler
/// runs, and no prediction is attempted. Request bodies are not logged
/// or stored.
pub async fn predict_churn(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>> {
    let record = FeatureRecord::assemble(&request);

    let labels = state.model.predict(std::slice::from_ref(&record))?;
    let label = labels
        .first()
        .copied()
        .ok_or_else(|| ServerError::Prediction("model returned an empty batch".to_string()))?;

    Ok(Json(PredictionResponse {
        churn_prediction: label,
    }))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
