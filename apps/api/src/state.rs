use std::sync::Arc;

use crate::inference::artifacts::ModelArtifacts;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Trained scaler + classifier, loaded once at startup and never mutated.
    /// Requests only ever read through this handle, so no locking is needed.
    pub artifacts: Arc<ModelArtifacts>,
}
