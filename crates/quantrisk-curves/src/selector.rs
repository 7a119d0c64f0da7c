//! Risk-free rate selection.
//!
//! Ports the reporting-period treasury lookup: exact date match first, then
//! a descending search for the nearest earlier usable rate, with a staleness
//! warning when the resolved rate is more than one trading day old.

use chrono::NaiveDateTime;
use log::warn;
use quantrisk_core::calendars::TradingCalendar;
use quantrisk_core::types::Date;

use crate::curve::TreasuryCurve;
use crate::error::{CurveError, CurveResult};

/// Sink for non-fatal selection warnings.
///
/// The selector never logs through process-wide state directly; the caller
/// chooses where warnings go by supplying a sink.
pub trait WarningSink: Send + Sync {
    /// Reports a warning message. Must not panic or block on the caller.
    fn warn(&self, message: &str);
}

/// Sink that forwards warnings to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}

/// Sink that discards all warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&self, _message: &str) {}
}

/// Sink that records warnings in memory, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: std::sync::Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink lock poisoned").clone()
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink lock poisoned")
            .push(message.to_string());
    }
}

/// Resolves the risk-free period return for a backtest window.
///
/// Holds its collaborators by reference: a trading calendar for distance
/// checks and a warning sink for staleness notices. The `term` label names
/// the treasury maturity in warning messages (e.g. `"1m"`, `"10y"`).
pub struct TreasurySelector<'a> {
    calendar: &'a dyn TradingCalendar,
    sink: &'a dyn WarningSink,
    term: &'a str,
}

impl<'a> TreasurySelector<'a> {
    /// Creates a selector with the given collaborators.
    #[must_use]
    pub fn new(calendar: &'a dyn TradingCalendar, sink: &'a dyn WarningSink, term: &'a str) -> Self {
        Self {
            calendar,
            sink,
            term,
        }
    }

    /// Resolves the treasury rate to use for the window `[start, end]`.
    ///
    /// The end timestamp is normalized to midnight for curve lookup. An
    /// exact curve entry on the end day wins outright; otherwise the curve
    /// is searched backwards for the nearest earlier usable yield, warning
    /// through the sink when that resolution looks stale (more than one
    /// trading day away, or unknown distance, while the end day is inside
    /// the curve's covered range).
    ///
    /// With `compound` the annual yield is scaled by
    /// `(calendar days in window + 1) / 365`; otherwise it is returned
    /// unscaled.
    ///
    /// # Errors
    ///
    /// - `CurveError::EmptyCurve` if the curve has no rows.
    /// - `CurveError::InvalidWindow` if `start` is after `end`.
    /// - `CurveError::DataUnavailable` if no usable rate exists at or
    ///   before the end day.
    /// - `CurveError::NegativeDayDistance` if the calendar reports a
    ///   negative distance; that is a calendar bug and is never clamped.
    pub fn select_rate(
        &self,
        curve: &TreasuryCurve,
        start: NaiveDateTime,
        end: NaiveDateTime,
        compound: bool,
    ) -> CurveResult<f64> {
        if curve.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if start > end {
            return Err(CurveError::InvalidWindow {
                start: Date::from_datetime(start),
                end: Date::from_datetime(end),
            });
        }

        let end_day = Date::from_datetime(end);

        let resolved = match curve.rate_at(end_day) {
            Some(rate) => Some(rate),
            None => self.search_before(curve, end_day)?,
        };

        let Some(rate) = resolved else {
            return Err(CurveError::DataUnavailable { requested: end_day });
        };

        if compound {
            let window_days = (end - start).num_days();
            Ok(rate * (window_days + 1) as f64 / 365.0)
        } else {
            Ok(rate)
        }
    }

    /// Finds the nearest usable yield at or before `end_day`, checking the
    /// trading-day distance of the resolution.
    fn search_before(&self, curve: &TreasuryCurve, end_day: Date) -> CurveResult<Option<f64>> {
        // An end-day row with a missing yield is skipped here, so including
        // the end day in the range matches the strictly-before search of a
        // sorted-index bisection.
        for (day, rate) in curve.points_at_or_before(end_day) {
            let Some(rate) = rate else { continue };

            let distance = self.day_distance(day, end_day)?;
            let in_coverage = match (curve.first_date(), curve.last_date()) {
                (Some(first), Some(last)) => first <= end_day && end_day <= last,
                _ => false,
            };
            if distance.map_or(true, |d| d > 1) && in_coverage {
                self.sink.warn(&format!(
                    "No rate within 1 trading day of end date = {end_day} and term = {term}. \
                     Using {day}. Check that date doesn't exceed treasury history range.",
                    term = self.term,
                ));
            }
            return Ok(Some(rate));
        }
        Ok(None)
    }

    /// Trading-day distance from a resolved date to the end day.
    ///
    /// `None` means the calendar has no coverage, which is acceptable; a
    /// negative answer is not.
    fn day_distance(&self, from: Date, to: Date) -> CurveResult<Option<i64>> {
        match self.calendar.trading_day_distance(from, to) {
            Some(d) if d < 0 => Err(CurveError::NegativeDayDistance {
                from,
                to,
                distance: d,
            }),
            other => Ok(other),
        }
    }
}
