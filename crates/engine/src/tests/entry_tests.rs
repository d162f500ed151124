// Operand Entry Tests
//
// Rules for building the operand buffer: leading zero replacement,
// duplicate dot/exponent rejection, paren balancing, backspace, and the
// post-evaluation reset flag.

use super::type_operand;
use crate::{Calculator, Entry, Operator};

// ==================== BASIC ENTRY ====================

#[test]
fn test_empty_buffer_displays_zero() {
    let calc = Calculator::new();
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_digits_append() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "123");
    assert_eq!(calc.display(), "123");
}

#[test]
fn test_decimal_entry() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "3.14");
    assert_eq!(calc.display(), "3.14");
}

#[test]
fn test_exponent_entry() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "2e5");
    assert_eq!(calc.display(), "2e5");
}

// ==================== LEADING ZERO ====================

#[test]
fn test_leading_zero_replaced_by_digit() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "05");
    assert_eq!(calc.display(), "5");
}

#[test]
fn test_leading_zero_keeps_decimal_point() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "0.5");
    assert_eq!(calc.display(), "0.5");
}

#[test]
fn test_zero_not_replaced_later_in_buffer() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "105");
    assert_eq!(calc.display(), "105");
}

// ==================== DUPLICATE DOT AND EXPONENT ====================

#[test]
fn test_second_dot_is_ignored() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "3.1");
    calc.press(Entry::Dot);
    assert_eq!(calc.display(), "3.1");
}

#[test]
fn test_second_exponent_is_ignored() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "2e5");
    calc.press(Entry::Exponent);
    assert_eq!(calc.display(), "2e5");
}

#[test]
fn test_dot_on_empty_buffer() {
    let mut calc = Calculator::new();
    calc.press(Entry::Dot);
    assert_eq!(calc.display(), ".");
}

// ==================== PARENTHESES ====================

#[test]
fn test_open_paren_always_appends() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "((");
    assert_eq!(calc.display(), "((");
}

#[test]
fn test_close_paren_requires_open() {
    let mut calc = Calculator::new();
    calc.press(Entry::CloseParen);
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_close_paren_balances() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "(1)");
    calc.press(Entry::CloseParen);
    assert_eq!(calc.display(), "(1)");
}

// ==================== RESET FLAG ====================

#[test]
fn test_digit_after_evaluation_starts_fresh() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "2");
    calc.set_operator(Operator::Add).unwrap();
    type_operand(&mut calc, "3");
    calc.evaluate().unwrap();
    assert_eq!(calc.display(), "5");

    type_operand(&mut calc, "7");
    assert_eq!(calc.display(), "7");
}

#[test]
fn test_dot_after_evaluation_starts_fresh() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "2");
    calc.set_operator(Operator::Add).unwrap();
    type_operand(&mut calc, "3");
    calc.evaluate().unwrap();

    calc.press(Entry::Dot);
    assert_eq!(calc.display(), ".");
}

// ==================== NO LENGTH CAP ====================

#[test]
fn test_no_length_cap() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "1");
    for _ in 0..30 {
        calc.press(Entry::Digit('9'));
    }
    assert_eq!(calc.display().len(), 31);
}

// ==================== BACKSPACE ====================

#[test]
fn test_backspace_removes_last_character() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "123");
    calc.backspace();
    assert_eq!(calc.display(), "12");
}

#[test]
fn test_backspace_on_empty_is_noop() {
    let mut calc = Calculator::new();
    calc.backspace();
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_backspace_down_to_empty_displays_zero() {
    let mut calc = Calculator::new();
    type_operand(&mut calc, "7");
    calc.backspace();
    assert_eq!(calc.display(), "0");
}
