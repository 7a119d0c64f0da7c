//! Trading calendars.
//!
//! The treasury selector needs one answer from a calendar: how many market
//! open days separate two dates. Calendars here give that answer honestly,
//! returning `None` when their data does not cover the requested range
//! instead of extrapolating.

use crate::types::Date;

/// Trait for trading calendars.
///
/// Distances are counted exclusive of `from` and inclusive of `to`, and are
/// negative when `to` precedes `from`. `None` means the calendar has no
/// coverage for the range; callers decide what "unknown" means for them.
pub trait TradingCalendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a market-open day.
    fn is_trading_day(&self, date: Date) -> bool;

    /// Counts trading days between two dates.
    fn trading_day_distance(&self, from: Date, to: Date) -> Option<i64> {
        if from <= to {
            Some(self.walk_count(from, to))
        } else {
            Some(-self.walk_count(to, from))
        }
    }

    /// Counts trading days in `(start, end]` by walking day by day.
    #[doc(hidden)]
    fn walk_count(&self, start: Date, end: Date) -> i64 {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_trading_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// A weekend-only calendar (no holidays).
///
/// Weekdays are trading days; coverage is unlimited, so the distance is
/// never unknown. Useful as a default and for testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl TradingCalendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_trading_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// A calendar backed by an explicit list of trading days.
///
/// Built from an exchange's session index. Distances are exact within the
/// listed range and `None` as soon as either endpoint falls outside it,
/// which is how a caller learns the calendar simply does not know.
#[derive(Debug, Clone)]
pub struct IndexCalendar {
    /// Trading days, ascending and unique.
    days: Vec<Date>,
}

impl IndexCalendar {
    /// Creates a calendar from a list of trading days.
    ///
    /// The list is sorted and deduplicated; order of the input does not
    /// matter.
    #[must_use]
    pub fn new(mut days: Vec<Date>) -> Self {
        days.sort_unstable();
        days.dedup();
        Self { days }
    }

    /// Returns the first covered date, if any.
    #[must_use]
    pub fn first_day(&self) -> Option<Date> {
        self.days.first().copied()
    }

    /// Returns the last covered date, if any.
    #[must_use]
    pub fn last_day(&self) -> Option<Date> {
        self.days.last().copied()
    }

    fn covers(&self, date: Date) -> bool {
        match (self.first_day(), self.last_day()) {
            (Some(first), Some(last)) => first <= date && date <= last,
            _ => false,
        }
    }

    /// Number of listed days at or before `date`.
    fn rank(&self, date: Date) -> i64 {
        self.days.partition_point(|d| *d <= date) as i64
    }
}

impl TradingCalendar for IndexCalendar {
    fn name(&self) -> &'static str {
        "Session Index"
    }

    fn is_trading_day(&self, date: Date) -> bool {
        self.days.binary_search(&date).is_ok()
    }

    fn trading_day_distance(&self, from: Date, to: Date) -> Option<i64> {
        if !self.covers(from) || !self.covers(to) {
            return None;
        }
        Some(self.rank(to) - self.rank(from))
    }
}
