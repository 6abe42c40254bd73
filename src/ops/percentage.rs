// ============================================================================
// Percentage Operations
// Percent-of, percentage representation, and percentage adjustment
// ============================================================================

use crate::errors::{ArithmeticError, ArithmeticResult};

/// Compute `percent` percent of `value` (value × percent / 100).
#[inline]
pub fn percent_of(value: f64, percent: f64) -> f64 {
    (value * percent) / 100.0
}

/// Compute what percentage `part` represents of `total`.
///
/// # Errors
/// Returns `InvalidArgument` when `total` is exactly zero.
#[inline]
pub fn what_percent(part: f64, total: f64) -> ArithmeticResult<f64> {
    if total == 0.0 {
        tracing::trace!(part, "rejected percentage of zero total");
        return Err(ArithmeticError::InvalidArgument(
            "Total value cannot be zero",
        ));
    }
    Ok((part / total) * 100.0)
}

/// Increase `value` by `percent` percent.
#[inline]
pub fn add_percent(value: f64, percent: f64) -> f64 {
    value + percent_of(value, percent)
}

/// Decrease `value` by `percent` percent.
#[inline]
pub fn subtract_percent(value: f64, percent: f64) -> f64 {
    value - percent_of(value, percent)
}
