//! Application state management

use std::sync::Arc;

use crate::model::ChurnModel;

/// State shared across handlers: the loaded model.
///
/// Immutable after startup, so no locking is needed; the Arc alone
/// makes it safe to share across concurrent requests.
pub struct AppState {
    pub model: Arc<ChurnModel>,
}

impl AppState {
    pub fn new(model: ChurnModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}
