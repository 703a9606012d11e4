//! Unguarded numeric helpers.
//!
//! Apart from a zero divisor, inputs are not checked: NaN and infinities go
//! straight through to IEEE arithmetic.

mod error;

use std::f64::consts::PI;

pub use error::*;

/// Returns `a / b`.
///
/// # Errors
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero (either
/// sign). The error is meant to be propagated, not replaced by a fallback.
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// Area of a circle with the given radius.
pub fn calculate_area(radius: f64) -> f64 {
    PI * radius * radius
}
