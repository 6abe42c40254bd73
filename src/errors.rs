// ============================================================================
// Arithmetic Errors
// Error types for floating-point calculation operations
// ============================================================================

use std::fmt;

/// Errors that can occur during calculation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// Attempted division by zero
    DivisionByZero,
    /// Input outside the domain of the operation, with a fixed message
    InvalidArgument(&'static str),
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => {
                write!(f, "Division by zero is not allowed")
            },
            ArithmeticError::InvalidArgument(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for calculation operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
