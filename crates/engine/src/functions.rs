// Scientific function set (sin, cos, sqrt, etc.)
//
// This module contains the unary functions and their domain checks.
// Angle conversion happens here: direct trig converts the input,
// inverse trig converts the output.

use std::fmt;

use crate::AngleMode;
use crate::error::{CalcError, CalcResult};

/// Unary functions applicable to the current operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Log10,
    Ln,
    Log2,
    Sqrt,
    Cbrt,
    Factorial,
    Square,
    Cube,
    Exp,
    PowTen,
    Reciprocal,
    Abs,
}

impl Function {
    /// Apply the function to a parsed operand
    pub fn apply(self, x: f64, angle_mode: AngleMode) -> CalcResult<f64> {
        match self {
            Function::Sin => Ok(angle_mode.to_radians(x).sin()),
            Function::Cos => Ok(angle_mode.to_radians(x).cos()),
            Function::Tan => Ok(angle_mode.to_radians(x).tan()),
            // Out-of-domain inverse trig yields NaN, which the formatter
            // renders as the error sentinel
            Function::Asin => Ok(angle_mode.from_radians(x.asin())),
            Function::Acos => Ok(angle_mode.from_radians(x.acos())),
            Function::Atan => Ok(angle_mode.from_radians(x.atan())),
            Function::Sinh => Ok(x.sinh()),
            Function::Cosh => Ok(x.cosh()),
            Function::Tanh => Ok(x.tanh()),
            Function::Log10 => {
                if x <= 0.0 {
                    return Err(CalcError::NonPositiveInput(self));
                }
                Ok(x.log10())
            }
            Function::Ln => {
                if x <= 0.0 {
                    return Err(CalcError::NonPositiveInput(self));
                }
                Ok(x.ln())
            }
            Function::Log2 => {
                if x <= 0.0 {
                    return Err(CalcError::NonPositiveInput(self));
                }
                Ok(x.log2())
            }
            Function::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::NegativeInput(self));
                }
                Ok(x.sqrt())
            }
            // Real cube root, negatives included
            Function::Cbrt => Ok(x.cbrt()),
            Function::Factorial => factorial(x),
            Function::Square => Ok(x.powi(2)),
            Function::Cube => Ok(x.powi(3)),
            Function::Exp => Ok(x.exp()),
            Function::PowTen => Ok(10f64.powf(x)),
            Function::Reciprocal => {
                if x == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(1.0 / x)
            }
            Function::Abs => Ok(x.abs()),
        }
    }
}

/// Iterative factorial; exact doubles run out just past 170!
fn factorial(x: f64) -> CalcResult<f64> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(CalcError::NonNegativeIntegerRequired);
    }
    if x > 170.0 {
        return Err(CalcError::Overflow);
    }

    let n = x as u32;
    let mut result = 1.0;
    for i in 2..=n {
        result *= f64::from(i);
    }
    Ok(result)
}

// Display symbols match the button labels, so history entries read the
// way the keypad is printed.
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "sin⁻¹",
            Function::Acos => "cos⁻¹",
            Function::Atan => "tan⁻¹",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Log10 => "log10",
            Function::Ln => "ln",
            Function::Log2 => "log₂",
            Function::Sqrt => "√",
            Function::Cbrt => "∛",
            Function::Factorial => "x!",
            Function::Square => "^2",
            Function::Cube => "^3",
            Function::Exp => "e^x",
            Function::PowTen => "10^x",
            Function::Reciprocal => "⅟",
            Function::Abs => "|x|",
        };
        write!(f, "{}", symbol)
    }
}
