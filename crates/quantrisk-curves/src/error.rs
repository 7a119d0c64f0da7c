//! Error types for curve operations.

use quantrisk_core::types::Date;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// No usable rate exists at or before the requested date.
    #[error(
        "No rate for end date = {requested}. Check that date doesn't exceed treasury history range."
    )]
    DataUnavailable {
        /// The requested end date.
        requested: Date,
    },

    /// The calendar reported a negative trading-day distance.
    ///
    /// Distances from a resolved date to a later end date can never be
    /// negative; this indicates a calendar bug, not bad input data.
    #[error("Negative trading-day distance {distance} from {from} to {to}: calendar is inconsistent")]
    NegativeDayDistance {
        /// Resolved curve date the distance was measured from.
        from: Date,
        /// Requested end date the distance was measured to.
        to: Date,
        /// The offending distance.
        distance: i64,
    },

    /// The curve has no entries at all.
    #[error("Treasury curve is empty")]
    EmptyCurve,

    /// The reporting window is inverted.
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow {
        /// Window start date.
        start: Date,
        /// Window end date.
        end: Date,
    },

    /// A date appeared more than once in curve construction input.
    #[error("Duplicate curve date: {date}")]
    DuplicateDate {
        /// The duplicated date.
        date: Date,
    },
}
