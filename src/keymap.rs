// Keypad-to-engine dispatch
//
// Maps each key onto an engine action. This is the only place that
// knows about the secondary function set: the sin/cos/tan and log
// buttons resolve through it, every other word addresses its function
// directly. The engine only ever receives resolved names.

use engine::{CalcResult, Calculator, Entry, Function, Operator};
use keypad::key::Key;

/// Dispatch one key against the calculator
pub fn dispatch(calc: &mut Calculator, key: &Key) -> CalcResult<()> {
    match key {
        // Operand entry
        Key::Digit(digit) => calc.press(Entry::Digit(*digit)),
        Key::Dot => calc.press(Entry::Dot),
        Key::Exponent => calc.press(Entry::Exponent),
        Key::OpenParen => calc.press(Entry::OpenParen),
        Key::CloseParen => calc.press(Entry::CloseParen),

        // Binary operators
        Key::Plus => calc.set_operator(Operator::Add)?,
        Key::Minus => calc.set_operator(Operator::Subtract)?,
        Key::Times => calc.set_operator(Operator::Multiply)?,
        Key::Slash => calc.set_operator(Operator::Divide)?,
        Key::Percent => calc.set_operator(Operator::Modulo)?,
        Key::Caret => calc.set_operator(Operator::Power)?,
        Key::Equals => calc.evaluate()?,

        // Overloaded buttons, resolved through the secondary set
        Key::Sin => {
            calc.apply_function(resolve(calc.second_mode(), Function::Sin, Function::Asin))?
        }
        Key::Cos => {
            calc.apply_function(resolve(calc.second_mode(), Function::Cos, Function::Acos))?
        }
        Key::Tan => {
            calc.apply_function(resolve(calc.second_mode(), Function::Tan, Function::Atan))?
        }
        Key::Log => {
            calc.apply_function(resolve(calc.second_mode(), Function::Log10, Function::Log2))?
        }

        // Directly addressed functions
        Key::Asin => calc.apply_function(Function::Asin)?,
        Key::Acos => calc.apply_function(Function::Acos)?,
        Key::Atan => calc.apply_function(Function::Atan)?,
        Key::Sinh => calc.apply_function(Function::Sinh)?,
        Key::Cosh => calc.apply_function(Function::Cosh)?,
        Key::Tanh => calc.apply_function(Function::Tanh)?,
        Key::Log2 => calc.apply_function(Function::Log2)?,
        Key::Ln => calc.apply_function(Function::Ln)?,
        Key::Sqrt => calc.apply_function(Function::Sqrt)?,
        Key::Cbrt => calc.apply_function(Function::Cbrt)?,
        Key::Bang => calc.apply_function(Function::Factorial)?,
        Key::Square => calc.apply_function(Function::Square)?,
        Key::Cube => calc.apply_function(Function::Cube)?,
        Key::Exp => calc.apply_function(Function::Exp)?,
        Key::PowTen => calc.apply_function(Function::PowTen)?,
        Key::Reciprocal => calc.apply_function(Function::Reciprocal)?,
        Key::Abs => calc.apply_function(Function::Abs)?,

        // Memory
        Key::MemoryClear => calc.memory_clear(),
        Key::MemoryAdd => calc.memory_add()?,
        Key::MemorySubtract => calc.memory_subtract()?,
        Key::MemoryRecall => calc.memory_recall(),

        // Modes and editing
        Key::AngleToggle => calc.toggle_angle_mode(),
        Key::Second => calc.toggle_second_mode(),
        Key::Delete => calc.backspace(),
        Key::Clear => calc.clear(),
        Key::Random => calc.random(),
    }

    Ok(())
}

/// Pick from the primary or secondary function set
fn resolve(second: bool, primary: Function, secondary: Function) -> Function {
    if second { secondary } else { primary }
}
