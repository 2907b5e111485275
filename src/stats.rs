//! Descriptive statistics over distance distributions
//!
//! Computes the moment statistics reported alongside the dominant color:
//! sample mean, sample variance (n-1 denominator), Fisher-Pearson
//! bias-adjusted skewness, and excess kurtosis, plus min/max. All moments
//! use two-pass sums of centered powers rather than raw power sums;
//! distance lists from near-uniform images are full of near-identical
//! values and the naive formulas cancel catastrophically on them.
//!
//! Sentinels (see `Distribution` field docs): a single sample has
//! variance 0.0; skewness is NaN below 3 samples, kurtosis below 4, and
//! both are NaN when the variance is zero.

use serde::{Deserialize, Serialize};

use crate::constants::statistics::{MIN_KURTOSIS_SAMPLES, MIN_SKEWNESS_SAMPLES};

/// Descriptive statistics of one value list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Number of samples
    pub count: usize,
    /// Smallest sample, NaN when empty
    pub min: f64,
    /// Largest sample, NaN when empty
    pub max: f64,
    /// Sample mean, NaN when empty
    pub mean: f64,
    /// Sample variance with n-1 denominator; 0.0 for a single sample
    pub variance: f64,
    /// Bias-adjusted Fisher-Pearson skewness; NaN below 3 samples or for
    /// zero variance
    pub skewness: f64,
    /// Excess kurtosis; NaN below 4 samples or for zero variance
    pub kurtosis: f64,
}

/// Compute descriptive statistics over `values`.
///
/// Two-pass: mean first, then centered second through fourth powers.
pub fn describe(values: &[f64]) -> Distribution {
    let n = values.len();
    if n == 0 {
        return Distribution {
            count: 0,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            skewness: f64::NAN,
            kurtosis: f64::NAN,
        };
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    let mean = sum / n as f64;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &v in values {
        let d = v - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }

    let variance = if n == 1 { 0.0 } else { m2 / (n - 1) as f64 };

    let nf = n as f64;
    let skewness = if n < MIN_SKEWNESS_SAMPLES || variance == 0.0 {
        f64::NAN
    } else {
        let std_dev = variance.sqrt();
        nf / ((nf - 1.0) * (nf - 2.0)) * m3 / (std_dev * std_dev * std_dev)
    };

    let kurtosis = if n < MIN_KURTOSIS_SAMPLES || variance == 0.0 {
        f64::NAN
    } else {
        nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0)) * m4 / (variance * variance)
            - 3.0 * (nf - 1.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0))
    };

    Distribution {
        count: n,
        min,
        max,
        mean,
        variance,
        skewness,
        kurtosis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_is_all_nan() {
        let d = describe(&[]);
        assert_eq!(d.count, 0);
        assert!(d.mean.is_nan());
        assert!(d.variance.is_nan());
    }

    #[test]
    fn test_single_sample_sentinels() {
        let d = describe(&[42.0]);
        assert_eq!(d.count, 1);
        assert_eq!(d.mean, 42.0);
        assert_eq!(d.min, 42.0);
        assert_eq!(d.max, 42.0);
        assert_eq!(d.variance, 0.0);
        assert!(d.skewness.is_nan());
        assert!(d.kurtosis.is_nan());
    }

    #[test]
    fn test_mean_and_sample_variance() {
        let d = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!(close(d.mean, 5.0));
        // sum of squared deviations = 32, n-1 = 7
        assert!(close(d.variance, 32.0 / 7.0));
        assert_eq!(d.min, 2.0);
        assert_eq!(d.max, 9.0);
    }

    #[test]
    fn test_symmetric_data_has_zero_skewness() {
        let d = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(close(d.skewness, 0.0));
    }

    #[test]
    fn test_right_tail_skews_positive() {
        let d = describe(&[1.0, 1.0, 1.0, 1.0, 100.0]);
        assert!(d.skewness > 1.0);
    }

    #[test]
    fn test_skewness_known_value() {
        // Verified against commons-math Skewness on the same data
        let d = describe(&[1.0, 2.0, 3.0, 6.0]);
        // mean 3, m2 = 14, m3 = 18, variance = 14/3
        let sd = (14.0f64 / 3.0).sqrt();
        let expected = 4.0 / (3.0 * 2.0) * 18.0 / (sd * sd * sd);
        assert!(close(d.skewness, expected));
    }

    #[test]
    fn test_kurtosis_known_value() {
        // mean 2.5, deviations +-1.5, +-0.5
        let d = describe(&[1.0, 2.0, 3.0, 4.0]);
        let m4 = 2.0 * 1.5f64.powi(4) + 2.0 * 0.5f64.powi(4);
        let variance = (2.0 * 2.25 + 2.0 * 0.25) / 3.0;
        let expected = 4.0 * 5.0 / (3.0 * 2.0 * 1.0) * m4 / (variance * variance)
            - 3.0 * 9.0 / (2.0 * 1.0);
        assert!(close(d.kurtosis, expected));
    }

    #[test]
    fn test_constant_data_degenerates_to_nan() {
        let d = describe(&[7.0; 10]);
        assert_eq!(d.variance, 0.0);
        assert!(d.skewness.is_nan());
        assert!(d.kurtosis.is_nan());
    }

    #[test]
    fn test_near_identical_values_stay_stable() {
        // Large offset with tiny spread; naive power sums would cancel
        let base = 1.0e9;
        let values: Vec<f64> = (0..100).map(|i| base + (i % 3) as f64).collect();
        let d = describe(&values);
        assert!(d.variance > 0.0);
        assert!(d.variance < 1.0);
        assert!(d.skewness.is_finite());
        assert!(d.kurtosis.is_finite());
    }

    #[test]
    fn test_two_samples_have_variance_but_no_skewness() {
        let d = describe(&[1.0, 3.0]);
        assert!(close(d.variance, 2.0));
        assert!(d.skewness.is_nan());
        assert!(d.kurtosis.is_nan());
    }
}
