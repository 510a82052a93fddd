//! Reproducible sample salary generation.
//!
//! Draws weekly salaries from a normal distribution using a seeded RNG, so
//! the same `(count, mean, std_dev, seed)` always yields the same salaries.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use rust_decimal::Decimal;

use crate::config::SampleSettings;
use crate::error::{EngineError, EngineResult};

/// Generates `count` weekly salaries rounded to whole dollars.
///
/// # Errors
///
/// Returns `InvalidInput` if `mean` is not finite or `std_dev` is negative
/// or not finite.
///
/// # Examples
///
/// ```
/// use payg_engine::sample::generate_sample_salaries;
///
/// let first = generate_sample_salaries(10, 1431.0, 527.0, 42).unwrap();
/// let second = generate_sample_salaries(10, 1431.0, 527.0, 42).unwrap();
/// assert_eq!(first.len(), 10);
/// assert_eq!(first, second);
/// ```
pub fn generate_sample_salaries(
    count: usize,
    mean: f64,
    std_dev: f64,
    seed: u64,
) -> EngineResult<Vec<i64>> {
    if !mean.is_finite() {
        return Err(EngineError::invalid_input(
            "mean",
            format!("must be a finite number, got {}", mean),
        ));
    }

    // Normal::new accepts a negative deviation, so check it here
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(EngineError::invalid_input(
            "std_dev",
            format!("must be a finite non-negative number, got {}", std_dev),
        ));
    }

    let normal = Normal::new(mean, std_dev)
        .map_err(|e| EngineError::invalid_input("std_dev", e.to_string()))?;

    let mut rng = StdRng::seed_from_u64(seed);
    Ok(normal
        .sample_iter(&mut rng)
        .take(count)
        .map(|salary: f64| salary.round() as i64)
        .collect())
}

/// Generates sample salaries from configured settings, as decimals ready
/// for the engine.
pub fn generate_from_settings(settings: &SampleSettings) -> EngineResult<Vec<Decimal>> {
    let salaries =
        generate_sample_salaries(settings.count, settings.mean, settings.std_dev, settings.seed)?;
    Ok(salaries.into_iter().map(Decimal::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let first = generate_sample_salaries(25, 1431.0, 527.0, 7).unwrap();
        let second = generate_sample_salaries(25, 1431.0, 527.0, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_sequence() {
        let first = generate_sample_salaries(25, 1431.0, 527.0, 1).unwrap();
        let second = generate_sample_salaries(25, 1431.0, 527.0, 2).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_shorter_run_is_prefix_of_longer_run() {
        let short = generate_sample_salaries(5, 1431.0, 527.0, 42).unwrap();
        let long = generate_sample_salaries(10, 1431.0, 527.0, 42).unwrap();
        assert_eq!(short[..], long[..5]);
    }

    #[test]
    fn test_zero_std_dev_returns_mean() {
        let salaries = generate_sample_salaries(3, 1500.4, 0.0, 42).unwrap();
        assert_eq!(salaries, vec![1500, 1500, 1500]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate_sample_salaries(0, 1431.0, 527.0, 42).unwrap().is_empty());
    }

    #[test]
    fn test_negative_std_dev_is_rejected() {
        let err = generate_sample_salaries(3, 1431.0, -1.0, 42).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "std_dev"));
    }

    #[test]
    fn test_infinite_std_dev_is_rejected() {
        let err = generate_sample_salaries(3, 1431.0, f64::INFINITY, 42).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "std_dev"));
    }

    #[test]
    fn test_nan_mean_is_rejected() {
        let err = generate_sample_salaries(3, f64::NAN, 527.0, 42).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "mean"));
    }

    #[test]
    fn test_from_settings_rejects_negative_std_dev() {
        let settings = SampleSettings {
            std_dev: -1.0,
            ..SampleSettings::default()
        };
        assert!(generate_from_settings(&settings).is_err());
    }

    #[test]
    fn test_from_settings_uses_configured_count() {
        let settings = SampleSettings {
            count: 4,
            ..SampleSettings::default()
        };
        assert_eq!(generate_from_settings(&settings).unwrap().len(), 4);
    }
}
