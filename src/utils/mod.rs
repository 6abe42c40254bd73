// ============================================================================
// Utilities Module
// Comparison helpers for floating-point results
// ============================================================================

mod compare;

pub use compare::{approx_eq, DEFAULT_TOLERANCE};
