//! Floating-point tolerance utilities.
//!
//! The metrics layer has two distinct zero-handling policies (NaN sentinel
//! vs. 0.0 fallback) that both hinge on the same "is this effectively zero"
//! test. That test lives here so the policies can diverge without the
//! comparison itself ever being duplicated.

/// Default absolute tolerance for [`tolerant_equals`].
pub const DEFAULT_ATOL: f64 = 1e-6;

/// Default relative tolerance for [`tolerant_equals`].
pub const DEFAULT_RTOL: f64 = 1e-6;

/// Returns true if `a` and `b` are equal within the default tolerances.
///
/// Uses the combined absolute/relative form `|a - b| <= atol + rtol * |b|`,
/// so comparing against a literal `0.0` degenerates to a plain absolute
/// check. NaN compares unequal to everything, including itself.
///
/// # Example
///
/// ```rust
/// use quantrisk_core::math::tolerant_equals;
///
/// assert!(tolerant_equals(1e-9, 0.0));
/// assert!(!tolerant_equals(1e-3, 0.0));
/// ```
#[must_use]
pub fn tolerant_equals(a: f64, b: f64) -> bool {
    tolerant_equals_with(a, b, DEFAULT_ATOL, DEFAULT_RTOL)
}

/// Returns true if `a` and `b` are equal within the given tolerances.
#[must_use]
pub fn tolerant_equals_with(a: f64, b: f64, atol: f64, rtol: f64) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}

/// Rounds a value to the given number of decimal places.
///
/// Used to strip float noise from return series before masking comparisons,
/// so that values differing only in the 15th decimal do not produce spurious
/// "below mean" classifications.
#[must_use]
pub fn round_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
