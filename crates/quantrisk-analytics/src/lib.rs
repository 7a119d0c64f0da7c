//! # Quantrisk Analytics
//!
//! Pure, stateless portfolio performance and risk metrics.
//!
//! Every function takes its full input and returns a plain scalar; nothing
//! is cached or retained between calls, and no argument is ever mutated.
//! Degenerate numeric inputs (zero volatility, zero MAR, zero relative
//! deviation) are not errors: each metric has a defined policy, either a
//! NaN "undefined" sentinel or a 0.0 fallback. The two policies are
//! deliberately distinct and documented per function.
//!
//! ## Example
//!
//! ```rust
//! use quantrisk_analytics::metrics;
//!
//! let sharpe = metrics::sharpe_ratio(0.12, 0.08, 0.02);
//! assert!((sharpe - 0.5).abs() < 1e-12);
//!
//! // Zero volatility is undefined, not infinite.
//! assert!(metrics::sharpe_ratio(0.0, 0.08, 0.02).is_nan());
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

pub mod error;
pub mod metrics;
pub mod series;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::metrics::{
        alpha, beta, downside_risk, excess_return, information_ratio, scrub, sharpe_ratio,
        sortino_ratio,
    };
    pub use crate::series::ReturnSeries;
}

pub use error::{AnalyticsError, AnalyticsResult};
pub use series::ReturnSeries;
