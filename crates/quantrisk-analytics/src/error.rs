//! Error types for the analytics crate.
//!
//! These cover boundary preconditions only (series construction and
//! alignment). Degenerate numeric inputs are handled by per-metric policies
//! in [`crate::metrics`], not by errors.

use quantrisk_core::types::Date;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics operations.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// Series dates are not strictly increasing.
    #[error("Non-increasing date at index {index}: {prev} >= {current}")]
    NonIncreasingDates {
        /// Index where the ordering breaks.
        index: usize,
        /// Date before the break.
        prev: Date,
        /// Offending date.
        current: Date,
    },

    /// Paired series have different lengths.
    #[error("Series length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// Paired series disagree on a date.
    #[error("Date misalignment at index {index}: {left} vs {right}")]
    DateMisalignment {
        /// Index of the disagreement.
        index: usize,
        /// Date in the first series.
        left: Date,
        /// Date in the second series.
        right: Date,
    },
}
