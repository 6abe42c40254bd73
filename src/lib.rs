// ============================================================================
// Calcutil Library
// Stateless arithmetic and percentage calculations over f64
// ============================================================================

//! # Calcutil
//!
//! A small, reusable arithmetic helper crate: elementary operations and
//! percentage calculations over IEEE-754 double-precision values.
//!
//! ## Features
//!
//! - **Pure functions** with no internal state or side effects
//! - **Explicit error signaling** via `Result` for division by zero and
//!   domain violations, each with a fixed human-readable message
//! - **IEEE-754 semantics** throughout, signed zero included
//! - **Safe under concurrency** since there is nothing to synchronize
//!
//! ## Example
//!
//! ```rust
//! use calcutil::prelude::*;
//!
//! assert_eq!(add(5.0, 3.0), 8.0);
//! assert_eq!(divide(10.0, -5.0), Ok(-2.0));
//! assert_eq!(sqrt(25.0), Ok(5.0));
//!
//! // 25% discount on 1000
//! assert_eq!(subtract_percent(1000.0, 25.0), 750.0);
//!
//! // Errors carry a fixed message for callers to assert on
//! let err = divide(1.0, 0.0).unwrap_err();
//! assert_eq!(err.to_string(), "Division by zero is not allowed");
//! ```

pub mod errors;
pub mod ops;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{ArithmeticError, ArithmeticResult};
    pub use crate::ops::{
        add, add_percent, divide, multiply, percent_of, power, sqrt, subtract, subtract_percent,
        what_percent,
    };
    pub use crate::utils::{approx_eq, DEFAULT_TOLERANCE};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_discount_workflow() {
        // Price a 1000 item at 25% off, then verify the discount share
        let final_price = subtract_percent(1000.0, 25.0);
        assert_eq!(final_price, 750.0);

        let discount = subtract(1000.0, final_price);
        assert_eq!(what_percent(discount, 1000.0), Ok(25.0));
    }

    #[test]
    fn test_markup_workflow() {
        let marked_up = add_percent(100.0, 10.0);
        assert_eq!(marked_up, 110.0);
        assert_eq!(percent_of(100.0, 10.0), 10.0);
    }

    #[test]
    fn test_errors_propagate_with_fixed_messages() {
        assert_eq!(
            divide(10.0, 0.0).unwrap_err().to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            sqrt(-1.0).unwrap_err().to_string(),
            "Cannot compute the square root of a negative number"
        );
        assert_eq!(
            what_percent(50.0, 0.0).unwrap_err().to_string(),
            "Total value cannot be zero"
        );
    }

    #[test]
    fn test_hypotenuse() {
        // sqrt(3^2 + 4^2) = 5
        let sum = add(power(3.0, 2.0), power(4.0, 2.0));
        assert_eq!(sqrt(sum), Ok(5.0));
    }
}
