//! Ranked prediction — linear scores per class, softmax, descending sort.
//!
//! Mirrors the training library's `predict_proba` semantics: multinomial
//! logistic transform over per-class linear scores, recomputed here from the
//! exported coefficients and intercepts.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::inference::artifacts::LinearModel;

/// One ranked entry of the predict response. Confidence is the class
/// probability as a percentage, rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPrediction {
    pub career: String,
    pub confidence: f64,
}

/// Rounds to 2 decimal places, the precision every client-facing float in the
/// predict response carries.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Per-class linear score: `coef · std + intercept`.
fn linear_scores(std: &[f64], model: &LinearModel) -> Vec<f64> {
    model
        .coefficients
        .iter()
        .zip(&model.intercepts)
        .map(|(row, intercept)| {
            row.iter().zip(std).map(|(c, x)| c * x).sum::<f64>() + intercept
        })
        .collect()
}

/// Max-subtracted softmax. Stable for extreme scores: the largest exponent is
/// exactly 0, so nothing overflows and the sum is at least 1.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let exp: Vec<f64> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f64 = exp.iter().sum();
    exp.iter().map(|&e| e / sum).collect()
}

/// Ranks every class by predicted probability, highest first.
///
/// The sort is stable, so equal probabilities keep class order — a tie-break
/// clients must not rely on.
pub fn rank_careers(std: &[f64], model: &LinearModel) -> Result<Vec<CareerPrediction>, AppError> {
    if let Some(row) = model.coefficients.first() {
        if row.len() != std.len() {
            return Err(AppError::ShapeMismatch {
                expected: row.len(),
                actual: std.len(),
            });
        }
    }

    let probabilities = softmax(&linear_scores(std, model));

    let mut ranked: Vec<CareerPrediction> = model
        .classes
        .iter()
        .zip(&probabilities)
        .map(|(career, p)| CareerPrediction {
            career: career.clone(),
            confidence: round2(p * 100.0),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranked)
}
