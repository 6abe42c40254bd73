// ============================================================================
// Operations Module
// Stateless arithmetic over IEEE-754 double-precision values
// ============================================================================
//
// This module provides:
// - basic: add, subtract, multiply, divide, power, sqrt
// - percentage: percent_of, what_percent, add_percent, subtract_percent
//
// Design principles:
// - Every operation is a pure function of its arguments
// - Fallible operations return Result (no panics)
// - IEEE-754 semantics throughout, signed zero included
// - Rejected inputs are reported via tracing before the error propagates

mod basic;
mod percentage;

pub use basic::{add, divide, multiply, power, sqrt, subtract};
pub use percentage::{add_percent, percent_of, subtract_percent, what_percent};
