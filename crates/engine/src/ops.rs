// Binary operators
//
// This module contains the pending-operation operator set and its
// arithmetic. Evaluation is always left to right over a single pending
// operation; there is no precedence.

use std::fmt;

use crate::error::{CalcError, CalcResult};

/// Binary operators selectable between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// Apply the operator to two parsed operands
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            // Remainder keeps the sign of the dividend
            Operator::Modulo => Ok(lhs % rhs),
            Operator::Power => {
                if lhs == 0.0 && rhs < 0.0 {
                    return Err(CalcError::InvalidPower);
                }
                Ok(lhs.powf(rhs))
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulo => "%",
            Operator::Power => "^",
        };
        write!(f, "{}", symbol)
    }
}
