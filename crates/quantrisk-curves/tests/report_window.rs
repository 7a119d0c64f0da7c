//! Reporting-period flow: resolve a risk-free rate, then compute metrics.
//!
//! Mirrors how a report generator drives the library: one selector call per
//! window, then pure metric calls over pre-aligned return series.

use approx::assert_relative_eq;
use chrono::NaiveDateTime;
use quantrisk_analytics::prelude::*;
use quantrisk_core::prelude::*;
use quantrisk_curves::prelude::*;

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn at_midnight(date: Date) -> NaiveDateTime {
    date.inner().and_hms_opt(0, 0, 0).unwrap()
}

fn series(start: Date, values: &[f64]) -> ReturnSeries {
    let pairs = values
        .iter()
        .enumerate()
        .map(|(i, v)| (start.add_days(i as i64), *v))
        .collect();
    ReturnSeries::from_pairs(pairs).unwrap()
}

#[test]
fn weekly_report_window() {
    // Trading week Mon 2020-01-06 .. Fri 2020-01-10, curve published through
    // Thursday only.
    let curve = TreasuryCurve::from_yields(vec![
        (d(2020, 1, 6), 0.0151),
        (d(2020, 1, 7), 0.0152),
        (d(2020, 1, 8), 0.0153),
        (d(2020, 1, 9), 0.0154),
    ])
    .unwrap();

    let calendar = WeekendCalendar;
    let sink = NullSink;
    let selector = TreasurySelector::new(&calendar, &sink, "1m");

    let start = at_midnight(d(2020, 1, 6));
    let end = at_midnight(d(2020, 1, 10));

    // Friday has no curve row; Thursday's rate is one trading day back, so
    // the lookup succeeds quietly. Compounded over a 5-day window.
    let treasury_return = selector.select_rate(&curve, start, end, true).unwrap();
    assert_relative_eq!(treasury_return, 0.0154 * 5.0 / 365.0);

    let algo = series(d(2020, 1, 6), &[0.004, -0.002, 0.006, 0.001, 0.003]);
    let bench = series(d(2020, 1, 6), &[0.002, -0.001, 0.004, 0.0, 0.002]);

    let algo_return: f64 = algo.values().sum();
    let bench_return: f64 = bench.values().sum();
    let algo_volatility = {
        let values: Vec<f64> = algo.values().collect();
        quantrisk_analytics::stats::sample_std_dev(&values)
    };

    let sharpe = sharpe_ratio(algo_volatility, algo_return, treasury_return);
    assert!(sharpe.is_finite());
    assert!(sharpe > 0.0);

    let ir = information_ratio(&algo, &bench).unwrap();
    assert!(ir.is_finite());

    let b = beta(&algo, &bench).unwrap();
    let a = alpha(algo_return, treasury_return, bench_return, b);
    assert!(a.is_finite());

    // Every report cell survives the sentinel scrub.
    for value in [sharpe, ir, b, a] {
        assert!(scrub(value).is_some());
    }
}

#[test]
fn degenerate_window_produces_sentinels_not_panics() {
    let curve = TreasuryCurve::from_yields(vec![(d(2020, 1, 6), 0.0151)]).unwrap();
    let calendar = WeekendCalendar;
    let selector = TreasurySelector::new(&calendar, &NullSink, "1m");

    let treasury_return = selector
        .select_rate(
            &curve,
            at_midnight(d(2020, 1, 6)),
            at_midnight(d(2020, 1, 6)),
            false,
        )
        .unwrap();

    // Flat algorithm: zero volatility.
    let algo = series(d(2020, 1, 6), &[0.0, 0.0, 0.0]);
    let values: Vec<f64> = algo.values().collect();
    let volatility = quantrisk_analytics::stats::sample_std_dev(&values);

    let sharpe = sharpe_ratio(volatility, 0.0, treasury_return);
    assert!(sharpe.is_nan());
    assert_eq!(scrub(sharpe), None);

    // The flat benchmark drives the 0.0 fallbacks, not NaN.
    assert_eq!(information_ratio(&algo, &algo).unwrap(), 0.0);
    assert_eq!(sortino_ratio(0.0, treasury_return, 0.0), 0.0);
}
