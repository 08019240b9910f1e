//! Model artifact loading, schema validation, and prediction

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use super::tree::RandomForest;
use crate::error::{ChurnError, Result};
use crate::features::{ColumnValue, FeatureRecord};

/// Ordinal code for a category unseen at training time, matching the
/// encoder convention the model was fit with.
const UNKNOWN_CATEGORY: f64 = -1.0;

/// Pre-trained churn classifier plus the training-time schema it was
/// fit on.
///
/// Process-scoped singleton: loaded once at startup, immutable after,
/// shared read-only across concurrent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnModel {
    /// Training column order; checked against [`FeatureRecord::COLUMNS`]
    /// at load.
    columns: Vec<String>,
    /// Fitted category lists per categorical column, ordinal-encoded by
    /// position.
    encoders: BTreeMap<String, Vec<String>>,
    forest: RandomForest,
}

impl ChurnModel {
    /// Load and validate the artifact from disk.
    ///
    /// Any failure here is fatal: the caller must not start serving.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| {
            ChurnError::Artifact(format!(
                "cannot read model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        let model: Self = serde_json::from_str(&json).map_err(|e| {
            ChurnError::Artifact(format!(
                "corrupt model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        model.validate()?;

        info!(
            path = %path.display(),
            trees = model.forest.n_trees(),
            columns = model.columns.len(),
            "Model artifact loaded"
        );

        Ok(model)
    }

    /// One-time schema check. The forest has no schema validation of its
    /// own, so column drift would mispredict silently if it slipped past
    /// this point.
    fn validate(&self) -> Result<()> {
        if self.columns.iter().map(String::as_str).ne(FeatureRecord::COLUMNS) {
            return Err(ChurnError::Artifact(format!(
                "artifact schema {:?} does not match the expected column order {:?}",
                self.columns,
                FeatureRecord::COLUMNS
            )));
        }

        if self.forest.n_features() != self.columns.len() {
            return Err(ChurnError::Artifact(format!(
                "forest was fit on {} features but the schema lists {} columns",
                self.forest.n_features(),
                self.columns.len()
            )));
        }

        self.forest.validate(self.columns.len())?;

        for (column, categories) in &self.encoders {
            if !self.columns.iter().any(|c| c == column) {
                return Err(ChurnError::Artifact(format!(
                    "encoder for unknown column {}",
                    column
                )));
            }
            if categories.is_empty() {
                return Err(ChurnError::Artifact(format!(
                    "encoder for column {} has no categories",
                    column
                )));
            }
        }

        Ok(())
    }

    /// Encode one record into the numeric row the forest consumes,
    /// walking the schema in training order.
    fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>> {
        self.columns
            .iter()
            .map(|column| {
                let value = record.value(column).ok_or_else(|| {
                    ChurnError::Prediction(format!("record has no column {}", column))
                })?;

                match value {
                    ColumnValue::Numeric(v) => Ok(v),
                    ColumnValue::Categorical(s) => {
                        let categories = self.encoders.get(column).ok_or_else(|| {
                            ChurnError::Prediction(format!(
                                "no fitted encoder for categorical column {}",
                                column
                            ))
                        })?;

                        Ok(categories
                            .iter()
                            .position(|c| c == s)
                            .map(|i| i as f64)
                            .unwrap_or(UNKNOWN_CATEGORY))
                    }
                }
            })
            .collect()
    }

    /// Predict one 0/1 label per record.
    ///
    /// Deterministic: the same batch always yields the same labels.
    /// `&self` is immutable, so concurrent callers are safe.
    pub fn predict(&self, records: &[FeatureRecord]) -> Result<Vec<i64>> {
        if records.is_empty() {
            return Err(ChurnError::Prediction("empty batch".to_string()));
        }

        let n_cols = self.columns.len();
        let mut flat = Vec::with_capacity(records.len() * n_cols);
        for record in records {
            flat.extend(self.encode(record)?);
        }

        let x = Array2::from_shape_vec((records.len(), n_cols), flat)
            .map_err(|e| ChurnError::Prediction(e.to_string()))?;

        let labels = self.forest.predict(&x)?;

        Ok(labels.iter().map(|v| v.round() as i64).collect())
    }
}
