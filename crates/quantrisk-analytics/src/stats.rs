//! Small sample-statistics helpers.
//!
//! All divisors are N−1 (sample statistics). Inputs with too few points for
//! a statistic yield NaN rather than panicking, matching the sentinel
//! convention of the metrics layer.

/// Arithmetic mean. NaN for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (divisor N−1). NaN for fewer than two points.
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Sample standard deviation (divisor N−1). NaN for fewer than two points.
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Sample covariance of two equal-length slices (divisor N−1).
///
/// NaN for fewer than two points or mismatched lengths.
#[must_use]
pub fn sample_covariance(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return f64::NAN;
    }
    let mx = mean(xs);
    let my = mean(ys);
    let sum: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mx) * (y - my))
        .sum();
    sum / (xs.len() - 1) as f64
}
