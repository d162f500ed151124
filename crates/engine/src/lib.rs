use std::fmt;

// --- MODULE DECLARATIONS ---
mod error;
mod format;
mod functions;
mod ops;

// Re-export the public API surface
pub use error::{CalcError, CalcResult};
pub use format::{ERROR_DISPLAY, format_result};
pub use functions::Function;
pub use ops::Operator;

#[cfg(test)]
mod tests;

/// Maximum number of retained history entries
pub const HISTORY_LIMIT: usize = 10;

/// Angle interpretation for the trigonometric functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    Radians,
    Degrees,
}

impl AngleMode {
    /// Convert an input operand into radians for direct trig
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Radians => x,
            AngleMode::Degrees => x.to_radians(),
        }
    }

    /// Convert an inverse-trig result out of radians
    pub fn from_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Radians => x,
            AngleMode::Degrees => x.to_degrees(),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Radians => write!(f, "RAD"),
            AngleMode::Degrees => write!(f, "DEG"),
        }
    }
}

/// Keypad entries that edit the operand buffer directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Digit(char),
    Dot,
    Exponent,
    OpenParen,
    CloseParen,
}

/// The calculator state machine.
///
/// Owns every piece of calculator state and mutates it through the
/// action handlers below. The hosting shell feeds it discrete key
/// events and reads the display projections back after each call; the
/// engine itself knows nothing about input devices or rendering.
pub struct Calculator {
    current: String,
    previous: String,
    operator: Option<Operator>,
    memory: f64,
    angle_mode: AngleMode,
    second_mode: bool,
    pending_reset: bool,
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: String::new(),
            previous: String::new(),
            operator: None,
            memory: 0.0,
            angle_mode: AngleMode::Radians,
            second_mode: false,
            pending_reset: false,
            history: Vec::new(),
        }
    }

    // --- OPERAND ENTRY ---

    /// Feed one entry key into the operand buffer.
    ///
    /// A pending reset (set after an evaluation) clears the buffer
    /// before the entry lands. Duplicate decimal points and exponent
    /// markers are ignored; a lone "0" is replaced by the next digit
    /// rather than prefixed.
    pub fn press(&mut self, entry: Entry) {
        if self.pending_reset {
            self.current.clear();
            self.pending_reset = false;
        }

        match entry {
            Entry::Digit(digit) => {
                if self.current == "0" {
                    self.current.clear();
                }
                self.current.push(digit);
            }
            Entry::Dot => {
                if !self.current.contains('.') {
                    self.current.push('.');
                }
            }
            Entry::Exponent => {
                if !self.current.contains('e') {
                    self.current.push('e');
                }
            }
            // Parens are kept as literal text; they never evaluate and
            // make the operand fail numeric parsing later
            Entry::OpenParen => self.current.push('('),
            Entry::CloseParen => {
                let opens = self.current.matches('(').count();
                let closes = self.current.matches(')').count();
                if opens > closes {
                    self.current.push(')');
                }
            }
        }
    }

    /// Remove the last character of the operand buffer
    pub fn backspace(&mut self) {
        self.current.pop();
    }

    /// Reset the pending operation and the operand buffer.
    /// Memory and history survive.
    pub fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operator = None;
        self.pending_reset = false;
    }

    // --- BINARY OPERATIONS ---

    /// Choose the binary operator for the pending operation.
    ///
    /// The typed operand moves into the left-hand slot. With an
    /// operation already pending it is evaluated first (left-to-right
    /// chaining, no precedence) and its result becomes the new left-hand
    /// side. With no operand typed yet, the operator is simply replaced
    /// so a mispressed key can be corrected.
    pub fn set_operator(&mut self, op: Operator) -> CalcResult<()> {
        if self.current.is_empty() && self.previous.is_empty() {
            return Ok(());
        }
        if self.current.is_empty() {
            self.operator = Some(op);
            return Ok(());
        }

        let chained = if self.previous.is_empty() {
            Ok(())
        } else {
            // A failed chain still stores the new operator, against the
            // sentinel text the failure left behind
            self.evaluate()
        };

        self.operator = Some(op);
        self.previous = std::mem::take(&mut self.current);
        self.pending_reset = true;
        chained
    }

    /// Evaluate the pending binary operation.
    ///
    /// No-op unless both operands are present. On failure the operand
    /// display becomes the error sentinel while the pending operation is
    /// left in place, so a later entry resumes it.
    pub fn evaluate(&mut self) -> CalcResult<()> {
        if self.current.is_empty() || self.previous.is_empty() {
            return Ok(());
        }
        let Some(op) = self.operator else {
            return Ok(());
        };

        let parsed = (self.previous.parse::<f64>(), self.current.parse::<f64>());
        let (lhs, rhs) = match parsed {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            _ => {
                self.current = ERROR_DISPLAY.to_string();
                return Err(CalcError::InvalidOperand);
            }
        };

        match op.apply(lhs, rhs) {
            Ok(result) => {
                let formatted = format_result(result);
                self.push_history(format!(
                    "{} {} {} = {}",
                    self.previous, op, self.current, formatted
                ));
                self.current = formatted;
                self.previous.clear();
                self.operator = None;
                self.pending_reset = true;
                Ok(())
            }
            Err(err) => {
                self.current = ERROR_DISPLAY.to_string();
                Err(err)
            }
        }
    }

    // --- UNARY FUNCTIONS ---

    /// Apply a unary function to the current operand in place
    pub fn apply_function(&mut self, function: Function) -> CalcResult<()> {
        let Ok(operand) = self.current.parse::<f64>() else {
            self.current = ERROR_DISPLAY.to_string();
            return Err(CalcError::InvalidOperand);
        };

        match function.apply(operand, self.angle_mode) {
            Ok(result) => {
                let formatted = format_result(result);
                self.push_history(format!("{}({}) = {}", function, self.current, formatted));
                self.current = formatted;
                self.pending_reset = true;
                Ok(())
            }
            Err(err) => {
                self.current = ERROR_DISPLAY.to_string();
                Err(err)
            }
        }
    }

    /// Replace the operand with a uniform random value in [0, 100),
    /// printed with six decimal places
    pub fn random(&mut self) {
        let value = rand::random::<f64>() * 100.0;
        self.current = format!("{:.6}", value);
    }

    // --- MEMORY ---

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// Add the current operand into memory; no-op while nothing is typed
    pub fn memory_add(&mut self) -> CalcResult<()> {
        self.memory_accumulate(1.0)
    }

    /// Subtract the current operand from memory; no-op while nothing is typed
    pub fn memory_subtract(&mut self) -> CalcResult<()> {
        self.memory_accumulate(-1.0)
    }

    fn memory_accumulate(&mut self, sign: f64) -> CalcResult<()> {
        if self.current.is_empty() {
            return Ok(());
        }
        let operand = self
            .current
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidOperand)?;
        self.memory += sign * operand;
        Ok(())
    }

    /// Copy memory into the operand buffer. Recall does not arm the
    /// entry reset, so further digits append to the recalled value.
    pub fn memory_recall(&mut self) {
        self.current = format_result(self.memory);
    }

    // --- MODES ---

    pub fn toggle_angle_mode(&mut self) {
        self.angle_mode = match self.angle_mode {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        };
    }

    pub fn toggle_second_mode(&mut self) {
        self.second_mode = !self.second_mode;
    }

    // --- DISPLAY PROJECTIONS ---

    /// The operand display; an empty buffer shows as "0"
    pub fn display(&self) -> &str {
        if self.current.is_empty() {
            "0"
        } else {
            &self.current
        }
    }

    /// The pending-operation display: empty, or "<previous> <operator>"
    pub fn pending_display(&self) -> String {
        match self.operator {
            Some(op) if !self.previous.is_empty() => format!("{} {}", self.previous, op),
            _ => String::new(),
        }
    }

    /// Completed operations, newest first, at most `HISTORY_LIMIT`
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Mode line: "RAD" or "DEG", plus " 2nd" while the secondary
    /// function set is active
    pub fn mode_indicator(&self) -> String {
        let mut text = self.angle_mode.to_string();
        if self.second_mode {
            text.push_str(" 2nd");
        }
        text
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn second_mode(&self) -> bool {
        self.second_mode
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    fn push_history(&mut self, entry: String) {
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
