// Error handling for calculator evaluation
//
// This module provides the error types shared by every fallible engine
// operation. All errors are recoverable by the user; the engine never
// terminates on bad input.

use std::fmt;

use crate::functions::Function;

/// Calculator error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Operand buffer does not parse as a number
    InvalidOperand,

    /// Division or reciprocal with a zero denominator
    DivisionByZero,

    /// Zero raised to a negative power
    InvalidPower,

    /// Logarithm of a non-positive operand
    NonPositiveInput(Function),

    /// Square root of a negative operand
    NegativeInput(Function),

    /// Factorial of a negative or fractional operand
    NonNegativeIntegerRequired,

    /// Factorial operand beyond what a double can represent
    Overflow,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidOperand => write!(f, "Invalid number input"),
            CalcError::DivisionByZero => write!(f, "Division by zero"),
            CalcError::InvalidPower => write!(f, "Invalid power operation"),
            CalcError::NonPositiveInput(func) => {
                write!(f, "Invalid input for {}: requires a positive operand", func)
            }
            CalcError::NegativeInput(func) => {
                write!(
                    f,
                    "Invalid input for {}: requires a non-negative operand",
                    func
                )
            }
            CalcError::NonNegativeIntegerRequired => {
                write!(f, "Factorial requires non-negative integer")
            }
            CalcError::Overflow => write!(f, "Number too large for factorial"),
        }
    }
}

impl std::error::Error for CalcError {}

impl CalcError {
    /// Get the diagnostic code for this error type
    /// Used by the shell when rendering reports
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::InvalidOperand => "E201",
            CalcError::DivisionByZero => "E202",
            CalcError::InvalidPower => "E203",
            CalcError::NonPositiveInput(_) => "E204",
            CalcError::NegativeInput(_) => "E205",
            CalcError::NonNegativeIntegerRequired => "E206",
            CalcError::Overflow => "E207",
        }
    }
}

/// Convenient Result type for engine operations
pub type CalcResult<T> = Result<T, CalcError>;
