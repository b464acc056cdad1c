//! Trained artifact loading — the fitted scaler and linear classifier.
//!
//! Both artifacts are JSON files exported by the training step. They are read
//! once in `main`, shape-checked, and then shared read-only for the lifetime
//! of the process. Any problem here is startup-fatal: the service must not
//! answer predict requests with a missing or malformed model.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::inference::features::FEATURE_COUNT;

/// Startup-fatal artifact problems. Surfaced out of `main` — there is no
/// per-request recovery from a bad model.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("scaler mean/scale lengths disagree: {mean_len} vs {scale_len}")]
    ScalerShape { mean_len: usize, scale_len: usize },

    #[error("scaler was fitted on {actual} features, expected {expected}")]
    ScalerWidth { expected: usize, actual: usize },

    #[error("model has {classes} classes but {rows} coefficient rows")]
    ClassCount { classes: usize, rows: usize },

    #[error("model has {classes} classes but {intercepts} intercepts")]
    InterceptCount { classes: usize, intercepts: usize },

    #[error("coefficient row for '{class}' has {actual} entries, expected {expected}")]
    CoefficientWidth {
        class: String,
        expected: usize,
        actual: usize,
    },
}

/// Per-feature standardization parameters (StandardScaler equivalent).
/// Scales are trusted to be nonzero — a zero scale is a training defect,
/// not an inference-time condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    pub fn feature_count(&self) -> usize {
        self.mean.len()
    }
}

/// Multiclass linear classifier: one coefficient row and intercept per class,
/// in `classes` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// The two artifacts together, loaded once and held in `AppState` behind an
/// `Arc`. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub scaler: Scaler,
    pub model: LinearModel,
}

impl ModelArtifacts {
    /// Loads `scaler.json` and `model.json` from `dir` and verifies the shape
    /// invariants: consistent scaler width, one coefficient row and intercept
    /// per class, every row as wide as the feature schema.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let scaler: Scaler = read_json(&dir.join("scaler.json"), "scaler.json")?;
        let model: LinearModel = read_json(&dir.join("model.json"), "model.json")?;

        let artifacts = Self { scaler, model };
        artifacts.check_shapes()?;

        info!(
            classes = artifacts.model.classes.len(),
            features = artifacts.scaler.feature_count(),
            "model artifacts loaded"
        );
        Ok(artifacts)
    }

    fn check_shapes(&self) -> Result<(), ArtifactError> {
        if self.scaler.mean.len() != self.scaler.scale.len() {
            return Err(ArtifactError::ScalerShape {
                mean_len: self.scaler.mean.len(),
                scale_len: self.scaler.scale.len(),
            });
        }
        if self.scaler.feature_count() != FEATURE_COUNT {
            return Err(ArtifactError::ScalerWidth {
                expected: FEATURE_COUNT,
                actual: self.scaler.feature_count(),
            });
        }
        if self.model.classes.len() != self.model.coefficients.len() {
            return Err(ArtifactError::ClassCount {
                classes: self.model.classes.len(),
                rows: self.model.coefficients.len(),
            });
        }
        if self.model.classes.len() != self.model.intercepts.len() {
            return Err(ArtifactError::InterceptCount {
                classes: self.model.classes.len(),
                intercepts: self.model.intercepts.len(),
            });
        }
        for (class, row) in self.model.classes.iter().zip(&self.model.coefficients) {
            if row.len() != FEATURE_COUNT {
                return Err(ArtifactError::CoefficientWidth {
                    class: class.clone(),
                    expected: FEATURE_COUNT,
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
    name: &'static str,
) -> Result<T, ArtifactError> {
    let file = File::open(path).map_err(|source| ArtifactError::Read { name, source })?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| ArtifactError::Parse { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn write_valid_artifacts(dir: &Path) {
        let scaler = json!({
            "mean": vec![0.5; FEATURE_COUNT],
            "scale": vec![1.0; FEATURE_COUNT],
        });
        let model = json!({
            "classes": ["A", "B"],
            "coefficients": [vec![0.1; FEATURE_COUNT], vec![-0.1; FEATURE_COUNT]],
            "intercepts": [0.0, 0.0],
        });
        fs::write(dir.join("scaler.json"), scaler.to_string()).unwrap();
        fs::write(dir.join("model.json"), model.to_string()).unwrap();
    }

    #[test]
    fn test_load_valid_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());

        let artifacts = ModelArtifacts::load(dir.path()).unwrap();
        assert_eq!(artifacts.model.classes, vec!["A", "B"]);
        assert_eq!(artifacts.scaler.feature_count(), FEATURE_COUNT);
    }

    #[test]
    fn test_missing_scaler_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelArtifacts::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Read {
                name: "scaler.json",
                ..
            }
        ));
    }

    #[test]
    fn test_garbage_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        fs::write(dir.path().join("model.json"), "not json at all").unwrap();

        let err = ModelArtifacts::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Parse {
                name: "model.json",
                ..
            }
        ));
    }

    #[test]
    fn test_short_scaler_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        let scaler = json!({ "mean": [0.5, 0.5], "scale": [1.0, 1.0] });
        fs::write(dir.path().join("scaler.json"), scaler.to_string()).unwrap();

        let err = ModelArtifacts::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::ScalerWidth {
                expected: FEATURE_COUNT,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_mismatched_scaler_arrays_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        let scaler = json!({
            "mean": vec![0.5; FEATURE_COUNT],
            "scale": vec![1.0; FEATURE_COUNT - 1],
        });
        fs::write(dir.path().join("scaler.json"), scaler.to_string()).unwrap();

        let err = ModelArtifacts::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::ScalerShape { .. }));
    }

    #[test]
    fn test_row_count_must_match_classes() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        let model = json!({
            "classes": ["A", "B", "C"],
            "coefficients": [vec![0.1; FEATURE_COUNT], vec![-0.1; FEATURE_COUNT]],
            "intercepts": [0.0, 0.0, 0.0],
        });
        fs::write(dir.path().join("model.json"), model.to_string()).unwrap();

        let err = ModelArtifacts::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::ClassCount {
                classes: 3,
                rows: 2
            }
        ));
    }

    #[test]
    fn test_narrow_coefficient_row_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_artifacts(dir.path());
        let model = json!({
            "classes": ["A", "B"],
            "coefficients": [vec![0.1; FEATURE_COUNT], vec![-0.1; 4]],
            "intercepts": [0.0, 0.0],
        });
        fs::write(dir.path().join("model.json"), model.to_string()).unwrap();

        let err = ModelArtifacts::load(dir.path()).unwrap_err();
        match err {
            ArtifactError::CoefficientWidth { class, actual, .. } => {
                assert_eq!(class, "B");
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
