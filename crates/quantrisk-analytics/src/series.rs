//! Dated return series.

use quantrisk_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// An ordered sequence of (date, return) pairs for a single entity.
///
/// Dates are strictly increasing, enforced at construction. Algorithm and
/// benchmark series passed to a paired metric must be aligned: same length,
/// same date at every index. Alignment is the caller's responsibility and
/// is validated (never assumed) via [`ReturnSeries::check_aligned`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    points: Vec<(Date, f64)>,
}

impl ReturnSeries {
    /// Creates a series from (date, return) pairs.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::NonIncreasingDates` if any date fails to be
    /// strictly greater than its predecessor (this also rejects duplicates).
    pub fn from_pairs(points: Vec<(Date, f64)>) -> AnalyticsResult<Self> {
        for (index, window) in points.windows(2).enumerate() {
            let (prev, current) = (window[0].0, window[1].0);
            if prev >= current {
                return Err(AnalyticsError::NonIncreasingDates {
                    index: index + 1,
                    prev,
                    current,
                });
            }
        }
        Ok(Self { points })
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the return values in date order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, r)| *r)
    }

    /// Returns the dates in order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.points.iter().map(|(d, _)| *d)
    }

    /// Iterates (date, return) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.points.iter().copied()
    }

    /// Validates that `self` and `other` are index-aligned.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` or `DateMisalignment` describing the first
    /// violation found.
    pub fn check_aligned(&self, other: &ReturnSeries) -> AnalyticsResult<()> {
        if self.len() != other.len() {
            return Err(AnalyticsError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        for (index, ((left, _), (right, _))) in self.iter().zip(other.iter()).enumerate() {
            if left != right {
                return Err(AnalyticsError::DateMisalignment { index, left, right });
            }
        }
        Ok(())
    }
}
