//! Feature standardization — maps raw inputs into the space the classifier
//! was trained in.

use crate::errors::AppError;
use crate::inference::artifacts::Scaler;

/// Standardizes a raw feature vector: `(raw[i] - mean[i]) / scale[i]`.
///
/// Pure and deterministic. Values are not range-checked — a raw value far
/// outside the training distribution just lands far from zero. The only
/// failure is a width disagreement with the fitted scaler.
pub fn standardize(raw: &[f64], scaler: &Scaler) -> Result<Vec<f64>, AppError> {
    if raw.len() != scaler.feature_count() {
        return Err(AppError::ShapeMismatch {
            expected: scaler.feature_count(),
            actual: raw.len(),
        });
    }

    Ok(raw
        .iter()
        .zip(scaler.mean.iter().zip(&scaler.scale))
        .map(|(x, (mean, scale))| (x - mean) / scale)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler(mean: Vec<f64>, scale: Vec<f64>) -> Scaler {
        Scaler { mean, scale }
    }

    #[test]
    fn test_standardize_centers_and_scales() {
        let s = scaler(vec![10.0, 0.0], vec![2.0, 4.0]);
        let std = standardize(&[14.0, -8.0], &s).unwrap();
        assert_eq!(std, vec![2.0, -2.0]);
    }

    #[test]
    fn test_mean_input_maps_to_zero() {
        let s = scaler(vec![64.5, 0.5], vec![20.0, 0.5]);
        let std = standardize(&[64.5, 0.5], &s).unwrap();
        assert!(std.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_width_mismatch_is_rejected() {
        let s = scaler(vec![0.0; 3], vec![1.0; 3]);
        let err = standardize(&[1.0, 2.0], &s).unwrap_err();
        assert!(matches!(
            err,
            AppError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_round_trip_reconstructs_raw() {
        let s = scaler(
            vec![0.5, 0.5, 64.5, 64.5, 50.0],
            vec![0.5, 0.5, 20.2, 20.2, 29.2],
        );
        let raw = [1.0, 0.0, 85.0, 40.0, 70.0];
        let std = standardize(&raw, &s).unwrap();

        for (i, v) in std.iter().enumerate() {
            let back = v * s.scale[i] + s.mean[i];
            assert!((back - raw[i]).abs() < 1e-9, "position {i}: {back}");
        }
    }

    #[test]
    fn test_out_of_range_input_extrapolates() {
        // No clamping: a wild input produces a wild (but finite) standardized value.
        let s = scaler(vec![50.0], vec![25.0]);
        let std = standardize(&[10_050.0], &s).unwrap();
        assert_eq!(std, vec![400.0]);
    }
}
