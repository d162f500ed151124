// Memory Register Tests
//
// Store/recall/accumulate behavior, and the interaction between recall
// and the entry reset flag.

use super::type_operand;
use crate::{CalcError, Calculator, Operator};

// ==================== ACCUMULATION ====================

#[test]
fn test_memory_starts_at_zero() {
    let calc = Calculator::new();
    assert_eq!(calc.memory(), 0.0);
}

#[test]
fn test_memory_add() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "25");
    calc.memory_add().unwrap();
    assert_eq!(calc.memory(), 25.0);
}

#[test]
fn test_memory_accumulates_across_operands() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "10");
    calc.memory_add().unwrap();
    calc.clear();
    type_operand(&mut calc, "4");
    calc.memory_subtract().unwrap();
    assert_eq!(calc.memory(), 6.0);
}

#[test]
fn test_memory_add_with_empty_operand_is_noop() {
    let mut calc = Calculator::new();
    calc.memory_add().unwrap();
    assert_eq!(calc.memory(), 0.0);
}

#[test]
fn test_memory_add_with_unparseable_operand_fails() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "(2");
    assert_eq!(calc.memory_add(), Err(CalcError::InvalidOperand));
    // A failed accumulate leaves memory untouched
    assert_eq!(calc.memory(), 0.0);
}

#[test]
fn test_memory_clear() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "9");
    calc.memory_add().unwrap();
    calc.memory_clear();
    assert_eq!(calc.memory(), 0.0);
}

// ==================== RECALL ====================

#[test]
fn test_memory_recall_replaces_operand() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "42");
    calc.memory_add().unwrap();
    calc.clear();

    calc.memory_recall();
    assert_eq!(calc.display(), "42");
}

#[test]
fn test_memory_recall_of_empty_memory_shows_zero() {
    let mut calc = Calculator::new();
    calc.memory_recall();
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_recall_does_not_arm_reset() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "4");
    calc.memory_add().unwrap();
    calc.clear();

    // Digits keep appending to the recalled value
    calc.memory_recall();
    type_operand(&mut calc, "2");
    assert_eq!(calc.display(), "42");
}

#[test]
fn test_recalled_value_usable_as_operand() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "6");
    calc.memory_add().unwrap();
    calc.clear();

    type_operand(&mut calc, "7");
    calc.set_operator(Operator::Multiply).unwrap();
    calc.memory_recall();
    calc.evaluate().unwrap();
    assert_eq!(calc.display(), "42");
}

// ==================== SURVIVAL ACROSS CLEAR ====================

#[test]
fn test_clear_preserves_memory() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "15");
    calc.memory_add().unwrap();
    calc.clear();
    assert_eq!(calc.memory(), 15.0);
}
