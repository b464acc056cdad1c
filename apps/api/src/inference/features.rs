//! Feature schema — the 11-field self-assessment vector.
//!
//! Field order is load-bearing: it must match the order the scaler and
//! classifier were fitted with. `UserInput::to_vector` and `DISPLAY_NAMES`
//! are the only two places that encode it.

use serde::Deserialize;

/// Width of the feature vector. The scaler and every coefficient row must
/// match this at artifact load time.
pub const FEATURE_COUNT: usize = 11;

/// Human-readable names parallel to the raw field order, used in the
/// `reasoning` section of the predict response.
pub const DISPLAY_NAMES: [&str; FEATURE_COUNT] = [
    "Likes Coding",
    "Likes Design",
    "Math Score",
    "Social Skills",
    "Analytical Thinking",
    "Creativity",
    "Risk Tolerance",
    "Leadership",
    "Public Speaking",
    "Teamwork",
    "Work Structure",
];

/// Raw self-assessment input. The first two fields are 0/1 indicators, the
/// rest are 0–100 scores, but values are not range-checked: out-of-range
/// numbers simply extrapolate through the linear model.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserInput {
    pub likes_coding: i64,
    pub likes_design: i64,
    pub math_score: i64,
    pub social_skill: i64,
    pub analytical_thinking: i64,
    pub creativity: i64,
    pub risk_tolerance: i64,
    pub leadership: i64,
    pub public_speaking: i64,
    pub teamwork: i64,
    pub structure: i64,
}

impl UserInput {
    /// Flattens the named fields into the fixed training-time order.
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.likes_coding as f64,
            self.likes_design as f64,
            self.math_score as f64,
            self.social_skill as f64,
            self.analytical_thinking as f64,
            self.creativity as f64,
            self.risk_tolerance as f64,
            self.leadership as f64,
            self.public_speaking as f64,
            self.teamwork as f64,
            self.structure as f64,
        ]
    }
}
