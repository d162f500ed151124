// Result formatting
//
// Turns computed doubles back into operand text. Magnitudes outside
// [1e-10, 1e10) switch to exponential notation; everything else keeps at
// most 8 fractional digits.

/// Error sentinel shown in place of a numeric result
pub const ERROR_DISPLAY: &str = "Error";

/// Format a computed value for the operand display
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return ERROR_DISPLAY.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if value.abs() >= 1e10 || value.abs() < 1e-10 {
        return to_exponential(value);
    }

    let text = value.to_string();
    if let Some((_, frac)) = text.split_once('.') {
        if frac.len() > 8 {
            // Rounding away accumulated binary representation noise
            return ((value * 1e8).round() / 1e8).to_string();
        }
    }
    text
}

/// Exponential notation with six fractional digits and an explicit
/// exponent sign, e.g. 1.234568e+12
fn to_exponential(value: f64) -> String {
    let text = format!("{:.6e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}
