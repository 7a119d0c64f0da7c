//! # Quantrisk Core
//!
//! Core types and utilities for the Quantrisk portfolio metrics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Quantrisk:
//!
//! - **Types**: the domain [`Date`](types::Date) newtype
//! - **Trading Calendars**: market-open day counting with explicit
//!   "unknown coverage" answers
//! - **Tolerance Math**: shared floating-point comparison utilities that
//!   govern the degenerate-input policies of the metrics layer
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: newtypes prevent mixing raw `chrono` values with
//!   domain dates
//! - **Explicit Over Implicit**: calendar coverage gaps are `None`, never a
//!   guessed number
//! - **One Tolerance**: every tolerance comparison in the workspace goes
//!   through [`math::tolerant_equals`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod error;
pub mod math;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{IndexCalendar, TradingCalendar, WeekendCalendar};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::math::{round_places, tolerant_equals};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Date;
