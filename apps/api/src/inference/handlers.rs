//! POST /predict — the full pipeline: standardize, rank, explain.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::inference::artifacts::ModelArtifacts;
use crate::inference::explain::{top_reasons, ReasonEntry};
use crate::inference::features::UserInput;
use crate::inference::normalize::standardize;
use crate::inference::predict::{rank_careers, CareerPrediction};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<CareerPrediction>,
    pub reasoning: Vec<ReasonEntry>,
}

/// POST /predict
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<Json<PredictResponse>, AppError> {
    Ok(Json(run_pipeline(&input, &state.artifacts)?))
}

/// The inference pipeline, independent of the HTTP layer. Deterministic:
/// identical input against identical artifacts yields identical output.
pub fn run_pipeline(
    input: &UserInput,
    artifacts: &ModelArtifacts,
) -> Result<PredictResponse, AppError> {
    let std = standardize(&input.to_vector(), &artifacts.scaler)?;
    let predictions = rank_careers(&std, &artifacts.model)?;

    // The top-ranked label maps back to its coefficient row for attribution.
    // Load-time checks guarantee the label exists in `classes`.
    let winner = predictions
        .first()
        .map(|p| p.career.clone())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("model has no classes")))?;
    let winner_index = artifacts
        .model
        .classes
        .iter()
        .position(|c| *c == winner)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("winner '{winner}' not in classes")))?;

    let reasoning = top_reasons(&std, &artifacts.model, winner_index);

    Ok(PredictResponse {
        predictions,
        reasoning,
    })
}
