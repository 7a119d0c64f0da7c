//! Treasury yield curve storage.

use std::collections::BTreeMap;

use quantrisk_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// An ordered mapping from calendar date to annualized yield.
///
/// Yields are fractions (`0.05` = 5%). A date can be present with a missing
/// yield (`None`), which models a published curve row whose value was
/// unusable; that is distinct from the date being absent entirely, and the
/// selector's fallback search skips such rows rather than stopping at them.
///
/// Curves are never mutated after construction; callers build a fresh one
/// per reporting window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreasuryCurve {
    points: BTreeMap<Date, Option<f64>>,
}

impl TreasuryCurve {
    /// Creates a curve from (date, yield) points.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::DuplicateDate` if the same date appears twice;
    /// silent last-writer-wins would hide upstream merge bugs.
    pub fn from_points(
        points: impl IntoIterator<Item = (Date, Option<f64>)>,
    ) -> CurveResult<Self> {
        let mut map = BTreeMap::new();
        for (date, value) in points {
            if map.insert(date, value).is_some() {
                return Err(CurveError::DuplicateDate { date });
            }
        }
        Ok(Self { points: map })
    }

    /// Creates a curve where every input date has a usable yield.
    pub fn from_yields(points: impl IntoIterator<Item = (Date, f64)>) -> CurveResult<Self> {
        Self::from_points(points.into_iter().map(|(d, y)| (d, Some(y))))
    }

    /// Returns the yield on `date`, or `None` if the date is absent or its
    /// yield is missing.
    #[must_use]
    pub fn rate_at(&self, date: Date) -> Option<f64> {
        self.points.get(&date).copied().flatten()
    }

    /// Returns true if `date` exists as a curve row, usable or not.
    #[must_use]
    pub fn contains_date(&self, date: Date) -> bool {
        self.points.contains_key(&date)
    }

    /// Iterates curve rows at or before `anchor`, newest first.
    pub fn points_at_or_before(
        &self,
        anchor: Date,
    ) -> impl Iterator<Item = (Date, Option<f64>)> + '_ {
        self.points.range(..=anchor).rev().map(|(d, y)| (*d, *y))
    }

    /// Returns the earliest curve date.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.points.keys().next().copied()
    }

    /// Returns the latest curve date.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.points.keys().next_back().copied()
    }

    /// Returns the number of curve rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
