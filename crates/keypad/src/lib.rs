pub mod key;

use key::Key;
use logos::{Logos, Span};

#[cfg(test)]
mod tests;

/// Tokenize an input line and return a Vec of keys, skipping anything
/// that does not match a button
pub fn lex(line: &str) -> Vec<Key> {
    Key::lexer(line)
        .filter_map(|k| k.ok())
        .collect()
}

/// Tokenize an input line keeping byte spans, so the shell can point
/// diagnostics at the offending column
pub fn lex_spanned(line: &str) -> Vec<(Result<Key, ()>, Span)> {
    Key::lexer(line).spanned().collect()
}
