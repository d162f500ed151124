// Engine Test Modules

mod entry_tests;
mod memory_tests;

use crate::{Calculator, Entry};

/// Type an operand the way the keypad would: one entry per character
pub fn type_operand(calc: &mut Calculator, text: &str) {
    for ch in text.chars() {
        let entry = match ch {
            '.' => Entry::Dot,
            'e' => Entry::Exponent,
            '(' => Entry::OpenParen,
            ')' => Entry::CloseParen,
            digit => Entry::Digit(digit),
        };
        calc.press(entry);
    }
}
