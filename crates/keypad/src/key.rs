use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\f]+")] // Ignore spaces, tabs and line breaks automatically
pub enum Key {
    // --- Operand entry ---

    // Digits arrive one character at a time, like keypad presses
    #[regex(r"[0-9]", |lex| lex.slice().chars().next())]
    Digit(char),

    #[token(".")]
    Dot,

    // The EE button (exponent marker inside the operand)
    #[token("e")]
    #[token("EE")]
    Exponent,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    // --- Binary operators ---
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("×")]
    #[token("*")]
    Times,

    #[token("÷")]
    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("^")]
    Caret,

    #[token("=")]
    Equals,

    // --- Function buttons ---
    // sin/cos/tan and log resolve through the secondary set in the shell;
    // every other word addresses its function directly.
    #[token("sin")]
    Sin,

    #[token("cos")]
    Cos,

    #[token("tan")]
    Tan,

    #[token("asin")]
    Asin,

    #[token("acos")]
    Acos,

    #[token("atan")]
    Atan,

    #[token("sinh")]
    Sinh,

    #[token("cosh")]
    Cosh,

    #[token("tanh")]
    Tanh,

    #[token("log")]
    #[token("log10")]
    Log,

    #[token("log2")]
    Log2,

    #[token("ln")]
    Ln,

    #[token("sqrt")]
    #[token("√")]
    Sqrt,

    #[token("cbrt")]
    #[token("∛")]
    Cbrt,

    #[token("!")]
    Bang, // Factorial (5!)

    #[token("sq")]
    Square,

    #[token("cube")]
    Cube,

    #[token("exp")]
    Exp,

    #[token("pow10")]
    PowTen,

    #[token("inv")]
    Reciprocal,

    #[token("abs")]
    Abs,

    // --- Memory ---
    #[token("mc")]
    MemoryClear,

    #[token("m+")]
    MemoryAdd,

    #[token("m-")]
    MemorySubtract,

    #[token("mr")]
    MemoryRecall,

    // --- Modes ---
    #[token("rad")]
    AngleToggle,

    #[token("2nd")]
    Second,

    // --- Editing ---
    #[token("del")]
    Delete,

    #[token("ac")]
    Clear,

    #[token("rand")]
    Random,
}

// This helps to show the key prettily in the print
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
