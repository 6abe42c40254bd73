// ============================================================================
// Basic Operations
// Elementary arithmetic: add, subtract, multiply, divide, power, sqrt
// ============================================================================

use crate::errors::{ArithmeticError, ArithmeticResult};

/// Add two values.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two values.
///
/// Follows IEEE-754 semantics, so multiplying a negative value by zero
/// yields `-0.0` (numerically equal to `0.0`).
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is exactly zero (either sign).
#[inline]
pub fn divide(a: f64, b: f64) -> ArithmeticResult<f64> {
    if b == 0.0 {
        tracing::trace!(dividend = a, "rejected division by zero");
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise `base` to `exponent`.
///
/// Standard `powf` semantics: negative and zero exponents are valid
/// (`power(2.0, -2.0)` is `0.25`, any base to the zeroth power is `1.0`).
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Compute the square root of `n`.
///
/// # Errors
/// Returns `InvalidArgument` when `n` is negative.
#[inline]
pub fn sqrt(n: f64) -> ArithmeticResult<f64> {
    if n < 0.0 {
        tracing::trace!(input = n, "rejected square root of negative number");
        return Err(ArithmeticError::InvalidArgument(
            "Cannot compute the square root of a negative number",
        ));
    }
    Ok(n.sqrt())
}
