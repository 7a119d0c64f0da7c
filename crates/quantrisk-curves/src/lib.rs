//! # Quantrisk Curves
//!
//! Treasury yield curve storage and risk-free rate selection.
//!
//! A backtest report needs one risk-free rate per reporting window, keyed by
//! the window's end date. Yield curves have gaps (weekends, holidays, data
//! outages), so [`TreasurySelector`] resolves the nearest usable rate at or
//! before the end date, flags stale resolutions through a caller-supplied
//! warning sink, and fails with a descriptive error when the curve has no
//! usable data at all.
//!
//! ## Example
//!
//! ```rust
//! use quantrisk_core::prelude::*;
//! use quantrisk_curves::prelude::*;
//!
//! let curve = TreasuryCurve::from_points(vec![
//!     (Date::from_ymd(2020, 1, 1).unwrap(), Some(0.05)),
//!     (Date::from_ymd(2020, 1, 3).unwrap(), Some(0.051)),
//! ])
//! .unwrap();
//!
//! let calendar = WeekendCalendar;
//! let selector = TreasurySelector::new(&calendar, &NullSink, "1m");
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap().inner().and_hms_opt(0, 0, 0).unwrap();
//! let end = Date::from_ymd(2020, 1, 2).unwrap().inner().and_hms_opt(0, 0, 0).unwrap();
//! let rate = selector.select_rate(&curve, start, end, false).unwrap();
//! assert_eq!(rate, 0.05); // falls back to the 2020-01-01 entry
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod curve;
pub mod error;
pub mod selector;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::TreasuryCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::selector::{LogSink, NullSink, TreasurySelector, WarningSink};
}

pub use curve::TreasuryCurve;
pub use error::{CurveError, CurveResult};
pub use selector::TreasurySelector;
