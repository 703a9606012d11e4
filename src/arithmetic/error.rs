use thiserror::Error;

/// Errors raised by the arithmetic helpers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArithmeticError {
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },
}
