//! Risk metric calculations.
//!
//! Each function documents its degenerate-input policy. Sharpe returns the
//! NaN sentinel for zero volatility while Sortino and the information ratio
//! return 0.0 for their degenerate cases; the divergence is deliberate and
//! load-bearing for downstream reports, so the three policies are kept
//! separate rather than unified.

use quantrisk_core::math::{round_places, tolerant_equals};

use crate::error::AnalyticsResult;
use crate::series::ReturnSeries;
use crate::stats;

/// Sharpe ratio: <http://en.wikipedia.org/wiki/Sharpe_ratio>
///
/// # Arguments
///
/// * `algorithm_volatility` - Algorithm volatility over the period
/// * `algorithm_return` - Algorithm period return
/// * `treasury_return` - Treasury period return
///
/// # Returns
///
/// `(algorithm_return - treasury_return) / algorithm_volatility`, or NaN
/// when the volatility is tolerance-equal to zero (the ratio is undefined,
/// not zero).
#[must_use]
pub fn sharpe_ratio(algorithm_volatility: f64, algorithm_return: f64, treasury_return: f64) -> f64 {
    if tolerant_equals(algorithm_volatility, 0.0) {
        return f64::NAN;
    }

    (algorithm_return - treasury_return) / algorithm_volatility
}

/// Sortino ratio: <http://en.wikipedia.org/wiki/Sortino_ratio>
///
/// # Arguments
///
/// * `algorithm_period_return` - Algorithm period return
/// * `treasury_period_return` - Treasury period return
/// * `mar` - Minimum acceptable return
///
/// # Returns
///
/// `(algorithm_period_return - treasury_period_return) / mar`, or 0.0 when
/// the MAR is tolerance-equal to zero. Unlike Sharpe, the degenerate answer
/// here is zero, not NaN.
#[must_use]
pub fn sortino_ratio(
    algorithm_period_return: f64,
    treasury_period_return: f64,
    mar: f64,
) -> f64 {
    if tolerant_equals(mar, 0.0) {
        return 0.0;
    }

    (algorithm_period_return - treasury_period_return) / mar
}

/// Downside risk: volatility over the below-mean subset of returns.
///
/// Both series are rounded to 8 decimal places before the below-mean mask
/// is taken, so float noise cannot manufacture spurious downside points.
/// The masked differences get a sample standard deviation (divisor N−1)
/// scaled by the square root of `normalization_factor` (typically the
/// annualization day count).
///
/// # Returns
///
/// 0.0 when fewer than two points qualify; an alignment error when the
/// series disagree on length or dates.
pub fn downside_risk(
    algorithm_returns: &ReturnSeries,
    mean_returns: &ReturnSeries,
    normalization_factor: f64,
) -> AnalyticsResult<f64> {
    algorithm_returns.check_aligned(mean_returns)?;

    let downside_diff: Vec<f64> = algorithm_returns
        .values()
        .zip(mean_returns.values())
        .map(|(r, m)| (round_places(r, 8), round_places(m, 8)))
        .filter(|(r, m)| r < m)
        .map(|(r, m)| r - m)
        .collect();

    if downside_diff.len() <= 1 {
        return Ok(0.0);
    }

    Ok(stats::sample_std_dev(&downside_diff) * normalization_factor.sqrt())
}

/// Information ratio: <http://en.wikipedia.org/wiki/Information_ratio>
///
/// Mean of the elementwise algorithm-minus-benchmark differences, divided
/// by their sample standard deviation (divisor N−1).
///
/// # Returns
///
/// 0.0 when the relative deviation is tolerance-equal to zero or NaN (e.g.
/// series shorter than two points); an alignment error when the series
/// disagree on length or dates.
pub fn information_ratio(
    algorithm_returns: &ReturnSeries,
    benchmark_returns: &ReturnSeries,
) -> AnalyticsResult<f64> {
    algorithm_returns.check_aligned(benchmark_returns)?;

    let relative_returns: Vec<f64> = algorithm_returns
        .values()
        .zip(benchmark_returns.values())
        .map(|(a, b)| a - b)
        .collect();

    let relative_deviation = stats::sample_std_dev(&relative_returns);

    if tolerant_equals(relative_deviation, 0.0) || relative_deviation.is_nan() {
        return Ok(0.0);
    }

    Ok(stats::mean(&relative_returns) / relative_deviation)
}

/// Alpha: <http://en.wikipedia.org/wiki/Alpha_(investment)>
///
/// # Arguments
///
/// * `algorithm_period_return` - Algorithm period return
/// * `treasury_period_return` - Treasury period return
/// * `benchmark_period_return` - Benchmark period return
/// * `beta` - Beta for the same period as the other values
///
/// # Returns
///
/// The algorithm's return in excess of what its beta exposure to the
/// benchmark would predict. Always defined for finite inputs.
#[must_use]
pub fn alpha(
    algorithm_period_return: f64,
    treasury_period_return: f64,
    benchmark_period_return: f64,
    beta: f64,
) -> f64 {
    algorithm_period_return
        - (treasury_period_return + beta * (benchmark_period_return - treasury_period_return))
}

/// Excess return of the algorithm over treasuries.
#[must_use]
pub fn excess_return(algorithm_period_return: f64, treasury_period_return: f64) -> f64 {
    algorithm_period_return - treasury_period_return
}

/// Beta of the algorithm to the benchmark.
///
/// Sample covariance of the paired returns over the benchmark's sample
/// variance.
///
/// # Returns
///
/// 0.0 when the series have fewer than two points or the benchmark variance
/// is tolerance-equal to zero; an alignment error when the series disagree
/// on length or dates.
pub fn beta(
    algorithm_returns: &ReturnSeries,
    benchmark_returns: &ReturnSeries,
) -> AnalyticsResult<f64> {
    algorithm_returns.check_aligned(benchmark_returns)?;

    let algo: Vec<f64> = algorithm_returns.values().collect();
    let bench: Vec<f64> = benchmark_returns.values().collect();

    let benchmark_variance = stats::sample_variance(&bench);
    if benchmark_variance.is_nan() || tolerant_equals(benchmark_variance, 0.0) {
        return Ok(0.0);
    }

    Ok(stats::sample_covariance(&algo, &bench) / benchmark_variance)
}

/// Maps a non-finite metric value to `None`.
///
/// Report assembly replaces undefined sentinels with an explicit missing
/// marker before serialization; this is the recognizer it uses.
#[must_use]
pub fn scrub(value: f64) -> Option<f64> {
    if value.is_nan() || value.is_infinite() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quantrisk_core::types::Date;

    fn daily_series(start_day: u32, returns: &[f64]) -> ReturnSeries {
        let pairs = returns
            .iter()
            .enumerate()
            .map(|(i, r)| {
                (
                    Date::from_ymd(2020, 1, start_day + i as u32).unwrap(),
                    *r,
                )
            })
            .collect();
        ReturnSeries::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_sharpe_ratio() {
        assert_relative_eq!(sharpe_ratio(0.1, 0.08, 0.02), 0.6);
        assert_relative_eq!(sharpe_ratio(0.1, 0.02, 0.08), -0.6);
    }

    #[test]
    fn test_sharpe_ratio_zero_volatility_is_undefined() {
        assert!(sharpe_ratio(0.0, 0.08, 0.02).is_nan());
        // Tolerance-equal to zero, not just bitwise zero.
        assert!(sharpe_ratio(1e-9, 0.08, 0.02).is_nan());
    }

    #[test]
    fn test_sharpe_linear_in_excess_return() {
        let sigma = 0.2;
        let base = sharpe_ratio(sigma, 0.05, 0.01);
        let doubled = sharpe_ratio(sigma, 0.09, 0.01);
        assert_relative_eq!(doubled, 2.0 * base);
    }

    #[test]
    fn test_sortino_ratio() {
        assert_relative_eq!(sortino_ratio(0.08, 0.02, 0.03), 2.0);
    }

    #[test]
    fn test_sortino_zero_mar_is_zero_not_nan() {
        // Distinct policy from Sharpe: zero MAR yields 0.0.
        assert_eq!(sortino_ratio(0.08, 0.02, 0.0), 0.0);
        assert_eq!(sortino_ratio(-0.5, 0.3, 1e-9), 0.0);
    }

    #[test]
    fn test_downside_risk_basic() {
        let algo = daily_series(1, &[0.01, -0.02, 0.03, -0.04]);
        let means = daily_series(1, &[0.0, 0.0, 0.0, 0.0]);

        // Qualifying differences: -0.02 and -0.04.
        let expected = crate::stats::sample_std_dev(&[-0.02, -0.04]) * 252f64.sqrt();
        let result = downside_risk(&algo, &means, 252.0).unwrap();
        assert_relative_eq!(result, expected);
    }

    #[test]
    fn test_downside_risk_fewer_than_two_points() {
        // Only one return below its mean.
        let algo = daily_series(1, &[0.01, -0.02, 0.03]);
        let means = daily_series(1, &[0.0, 0.0, 0.0]);
        assert_eq!(downside_risk(&algo, &means, 252.0).unwrap(), 0.0);

        // None below.
        let algo = daily_series(1, &[0.01, 0.02, 0.03]);
        assert_eq!(downside_risk(&algo, &means, 252.0).unwrap(), 0.0);
    }

    #[test]
    fn test_downside_risk_rounding_suppresses_noise() {
        // 0.1 + 0.2 sits a hair above 0.3 in floats; after 8-decimal
        // rounding it must not count as below a mean of exactly 0.3.
        let noisy = 0.1 + 0.2 - 1e-12;
        assert!(noisy < 0.3);
        let algo = daily_series(1, &[noisy, -0.01, -0.02]);
        let means = daily_series(1, &[0.3, 0.0, 0.0]);

        let expected = crate::stats::sample_std_dev(&[-0.01, -0.02]);
        let result = downside_risk(&algo, &means, 1.0).unwrap();
        assert_relative_eq!(result, expected);
    }

    #[test]
    fn test_downside_risk_misaligned_series() {
        let algo = daily_series(1, &[0.01, -0.02]);
        let means = daily_series(2, &[0.0, 0.0]);
        assert!(downside_risk(&algo, &means, 252.0).is_err());
    }

    #[test]
    fn test_information_ratio_basic() {
        let algo = daily_series(1, &[0.02, 0.01, 0.03]);
        let bench = daily_series(1, &[0.01, 0.01, 0.01]);

        // Differences: [0.01, 0.0, 0.02].
        let diffs = [0.01, 0.0, 0.02];
        let expected = crate::stats::mean(&diffs) / crate::stats::sample_std_dev(&diffs);
        let result = information_ratio(&algo, &bench).unwrap();
        assert_relative_eq!(result, expected);
    }

    #[test]
    fn test_information_ratio_identical_series_is_zero() {
        let algo = daily_series(1, &[0.02, 0.01, 0.03]);
        assert_eq!(information_ratio(&algo, &algo).unwrap(), 0.0);
    }

    #[test]
    fn test_information_ratio_constant_shift_is_zero() {
        let algo = daily_series(1, &[0.03, 0.02, 0.04]);
        let bench = daily_series(1, &[0.02, 0.01, 0.03]);
        // Constant shift means zero relative deviation, so the fallback
        // fires even though the mean difference is positive.
        assert_eq!(information_ratio(&algo, &bench).unwrap(), 0.0);
    }

    #[test]
    fn test_information_ratio_single_point_is_zero() {
        // One observation: sample deviation is NaN, policy says 0.0.
        let algo = daily_series(1, &[0.02]);
        let bench = daily_series(1, &[0.01]);
        assert_eq!(information_ratio(&algo, &bench).unwrap(), 0.0);
    }

    #[test]
    fn test_alpha() {
        // algo 8%, treasury 2%, benchmark 6%, beta 1.5:
        // alpha = 0.08 - (0.02 + 1.5 * 0.04) = 0.0.
        assert_relative_eq!(alpha(0.08, 0.02, 0.06, 1.5), 0.0);
        assert_relative_eq!(alpha(0.10, 0.02, 0.06, 1.0), 0.04);
    }

    #[test]
    fn test_alpha_beta_zero_reduces_to_excess_return() {
        assert_eq!(alpha(0.08, 0.02, 0.06, 0.0), 0.08 - 0.02);
        assert_eq!(alpha(0.08, 0.02, 0.06, 0.0), excess_return(0.08, 0.02));
    }

    #[test]
    fn test_beta_of_scaled_series() {
        let bench = daily_series(1, &[0.01, -0.02, 0.03, 0.0]);
        let algo_pairs: Vec<_> = bench.iter().map(|(d, r)| (d, 2.0 * r)).collect();
        let algo = ReturnSeries::from_pairs(algo_pairs).unwrap();

        assert_relative_eq!(beta(&algo, &bench).unwrap(), 2.0);
        assert_relative_eq!(beta(&bench, &bench).unwrap(), 1.0);
    }

    #[test]
    fn test_beta_degenerate_benchmark_is_zero() {
        let algo = daily_series(1, &[0.01, -0.02, 0.03]);
        let flat = daily_series(1, &[0.01, 0.01, 0.01]);
        assert_eq!(beta(&algo, &flat).unwrap(), 0.0);

        let short_a = daily_series(1, &[0.01]);
        let short_b = daily_series(1, &[0.02]);
        assert_eq!(beta(&short_a, &short_b).unwrap(), 0.0);
    }

    #[test]
    fn test_scrub() {
        assert_eq!(scrub(1.5), Some(1.5));
        assert_eq!(scrub(0.0), Some(0.0));
        assert_eq!(scrub(f64::NAN), None);
        assert_eq!(scrub(f64::INFINITY), None);
        assert_eq!(scrub(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_sharpe_then_scrub_supports_reporting() {
        // The degenerate Sharpe sentinel is recognizable downstream.
        assert_eq!(scrub(sharpe_ratio(0.0, 0.08, 0.02)), None);
        assert!(scrub(sharpe_ratio(0.1, 0.08, 0.02)).is_some());
    }
}
