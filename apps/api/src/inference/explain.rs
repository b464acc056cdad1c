//! Attribution — the "why" behind the top prediction.
//!
//! For a linear model the contribution of feature i to a class score is
//! exactly `coefficient_i * standardized_i`; no approximation is involved.
//! That identity is what makes this module valid. If the classifier is ever
//! swapped for a non-linear one, this attribution becomes meaningless and
//! must be replaced, not reused.

use serde::{Deserialize, Serialize};

use crate::inference::artifacts::LinearModel;
use crate::inference::features::DISPLAY_NAMES;
use crate::inference::predict::round2;

/// How many reasoning entries the response carries.
const TOP_REASONS: usize = 3;

/// One signed contribution. Positive pushed the input toward the winning
/// class, negative pushed away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonEntry {
    pub feature: String,
    pub impact: f64,
}

/// Returns the top contributions to `winner_index`'s linear score, ranked by
/// absolute magnitude. Impacts are rounded to 2 decimals before ranking, the
/// same values the client sees.
///
/// Only the winning class is explained; attribution for runners-up is
/// deliberately not offered.
pub fn top_reasons(std: &[f64], model: &LinearModel, winner_index: usize) -> Vec<ReasonEntry> {
    let coefficients = &model.coefficients[winner_index];

    let mut reasons: Vec<ReasonEntry> = coefficients
        .iter()
        .zip(std)
        .zip(DISPLAY_NAMES.iter())
        .map(|((c, x), name)| ReasonEntry {
            feature: name.to_string(),
            impact: round2(c * x),
        })
        .collect();

    reasons.sort_by(|a, b| {
        b.impact
            .abs()
            .partial_cmp(&a.impact.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    reasons.truncate(TOP_REASONS);
    reasons
}
