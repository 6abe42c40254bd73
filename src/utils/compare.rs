// ============================================================================
// Floating-Point Comparison
// Tolerance-based equality that treats signed zeros as equal
// ============================================================================

/// Default tolerance for approximate comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Compare two values within `tolerance`.
///
/// `0.0` and `-0.0` compare equal, so callers asserting on results such as
/// `multiply(-50.0, 0.0)` do not have to care which zero came back.
/// Returns `false` if either value is NaN.
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        // Covers exact matches and signed-zero pairs
        return true;
    }
    (a - b).abs() <= tolerance
}
