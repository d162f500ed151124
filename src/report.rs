// Error reporting with Ariadne
//
// This module renders keypad and engine errors as labelled reports
// against the line the user just typed.

use ariadne::{Color, Label, Report, ReportKind, Source};
use engine::CalcError;
use std::ops::Range;

const INPUT_ID: &str = "<input>";

/// Render an engine error at the key that triggered it
pub fn calc_error(line: &str, span: Range<usize>, error: &CalcError) {
    Report::build(ReportKind::Error, INPUT_ID, span.start)
        .with_code(error.code())
        .with_message(error.to_string())
        .with_label(
            Label::new((INPUT_ID, span))
                .with_message("this key failed")
                .with_color(Color::Red),
        )
        .finish()
        .print((INPUT_ID, Source::from(line)))
        .unwrap();
}

/// Render a character that maps to no button
pub fn unknown_key(line: &str, span: Range<usize>) {
    Report::build(ReportKind::Error, INPUT_ID, span.start)
        .with_code("E100")
        .with_message("Unknown key")
        .with_label(
            Label::new((INPUT_ID, span))
                .with_message("not a calculator button")
                .with_color(Color::Red),
        )
        .with_help("Type 'help' for the key listing")
        .finish()
        .print((INPUT_ID, Source::from(line)))
        .unwrap();
}
