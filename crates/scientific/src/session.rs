//! Calculator entry state.
//!
//! A [`Session`] holds everything the keypad shell needs between key presses: the
//! operand buffers, the pending operator, the angle mode, and the memory register.
//! [`Session::press`] never mutates its receiver; it returns the next state, so the
//! shell decides whether to keep it (for example after a domain error).

use std::str::FromStr;

use rand::Rng;
use spacecalc_core::format::display_entry;
use tracing::trace;

use crate::eval::{
    AngleMode, BinaryOp, Constant, EvalError, Evaluation, UnaryFunction, apply_binary,
    apply_unary_with_rng,
};

/// Memory register keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryAction {
    Clear,
    Recall,
    Add,
    Subtract,
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(BinaryOp),
    Equals,
    Clear,
    Delete,
    Function(UnaryFunction),
    Constant(Constant),
    Memory(MemoryAction),
    Angle(AngleMode),
}

impl Key {
    /// Expand one token into keys. Runs of digits and points (`"12.5"`) become one
    /// key per character; anything else must name a single key.
    pub fn parse_token(token: &str) -> Result<Vec<Key>, EvalError> {
        let is_number = !token.is_empty()
            && token.chars().all(|c| c.is_ascii_digit() || c == '.')
            && token.chars().any(|c| c.is_ascii_digit());
        if is_number {
            return Ok(token
                .chars()
                .map(|c| if c == '.' { Key::Point } else { Key::Digit(c) })
                .collect());
        }
        token.parse().map(|key| vec![key])
    }
}

impl FromStr for Key {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "." => Key::Point,
            "=" => Key::Equals,
            "c" | "C" | "AC" | "clear" => Key::Clear,
            "del" | "DEL" | "⌫" => Key::Delete,
            "mc" | "MC" => Key::Memory(MemoryAction::Clear),
            "mr" | "MR" => Key::Memory(MemoryAction::Recall),
            "m+" | "M+" => Key::Memory(MemoryAction::Add),
            "m-" | "M-" => Key::Memory(MemoryAction::Subtract),
            "deg" => Key::Angle(AngleMode::Degrees),
            "rad" => Key::Angle(AngleMode::Radians),
            _ => {
                let mut chars = s.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    if c.is_ascii_digit() {
                        return Ok(Key::Digit(c));
                    }
                }
                if let Ok(op) = s.parse::<BinaryOp>() {
                    Key::Operator(op)
                } else if let Ok(constant) = s.parse::<Constant>() {
                    Key::Constant(constant)
                } else if let Ok(func) = s.parse::<UnaryFunction>() {
                    Key::Function(func)
                } else {
                    return Err(EvalError::UnknownKey(s.to_string()));
                }
            }
        };
        Ok(key)
    }
}

/// Rendered display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDisplay {
    pub current: String,
    /// Previous operand followed by the pending operator symbol, or empty.
    pub previous: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub current: String,
    pub previous: String,
    pub pending: Option<BinaryOp>,
    /// The next digit starts a fresh entry instead of appending.
    pub reset_on_input: bool,
    pub angle_mode: AngleMode,
    pub memory: f64,
}

impl Session {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            ..Self::default()
        }
    }

    /// Numeric value of the current entry, if it parses.
    pub fn current_value(&self) -> Option<f64> {
        parse_operand(&self.current)
    }

    pub fn display(&self) -> SessionDisplay {
        let previous = match self.pending {
            Some(op) => format!("{} {}", display_entry(&self.previous), op.symbol()),
            None => String::new(),
        };
        SessionDisplay {
            current: display_entry(&self.current),
            previous,
        }
    }

    /// Apply one key press and return the resulting state.
    pub fn press(&self, key: Key) -> Result<Session, EvalError> {
        self.press_with_rng(key, &mut rand::rng())
    }

    /// Apply a sequence of key presses, stopping at the first error.
    pub fn press_all<I>(&self, keys: I) -> Result<Session, EvalError>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter()
            .try_fold(self.clone(), |session, key| session.press(key))
    }

    /// [`Session::press`] with an explicit random source for the `rand` key.
    pub fn press_with_rng<R: Rng>(&self, key: Key, rng: &mut R) -> Result<Session, EvalError> {
        let mut next = self.clone();
        match key {
            Key::Digit(digit) => next.append(digit),
            Key::Point => next.append('.'),
            Key::Operator(op) => next.choose_operator(op),
            Key::Equals => next.evaluate_pending(),
            Key::Clear => {
                next.current.clear();
                next.previous.clear();
                next.pending = None;
            }
            Key::Delete => {
                next.current.pop();
            }
            Key::Function(func) => next.apply_function(func, rng)?,
            Key::Constant(constant) => {
                next.reset_on_input = false;
                next.current = constant.value().to_string();
            }
            Key::Memory(action) => next.apply_memory(action),
            Key::Angle(mode) => next.angle_mode = mode,
        }
        trace!(?key, current = %next.current, previous = %next.previous, "key pressed");
        Ok(next)
    }

    fn append(&mut self, ch: char) {
        if self.reset_on_input {
            self.current.clear();
            self.reset_on_input = false;
        }
        if ch == '.' && self.current.contains('.') {
            return;
        }
        self.current.push(ch);
    }

    fn choose_operator(&mut self, op: BinaryOp) {
        if self.current.is_empty() {
            return;
        }
        if !self.previous.is_empty() {
            self.evaluate_pending();
        }
        self.pending = Some(op);
        self.previous = std::mem::take(&mut self.current);
    }

    fn evaluate_pending(&mut self) {
        let (Some(op), Some(lhs), Some(rhs)) = (
            self.pending,
            parse_operand(&self.previous),
            parse_operand(&self.current),
        ) else {
            return;
        };
        self.current = apply_binary(op, lhs, rhs).to_string();
        self.previous.clear();
        self.pending = None;
        self.reset_on_input = true;
    }

    fn apply_function<R: Rng>(
        &mut self,
        func: UnaryFunction,
        rng: &mut R,
    ) -> Result<(), EvalError> {
        let Some(value) = parse_operand(&self.current) else {
            return Ok(());
        };
        match apply_unary_with_rng(func, value, self.angle_mode, rng)? {
            Evaluation::Value(result) => {
                self.current = result.to_string();
                self.reset_on_input = true;
            }
            Evaluation::RequiresSecondOperand(op) => {
                self.previous = std::mem::take(&mut self.current);
                self.pending = Some(op);
            }
        }
        Ok(())
    }

    fn apply_memory(&mut self, action: MemoryAction) {
        let value = parse_operand(&self.current).unwrap_or(0.0);
        match action {
            MemoryAction::Clear => self.memory = 0.0,
            MemoryAction::Recall => self.current = self.memory.to_string(),
            MemoryAction::Add => self.memory += value,
            MemoryAction::Subtract => self.memory -= value,
        }
    }
}

fn parse_operand(buffer: &str) -> Option<f64> {
    buffer.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn keys(tokens: &[&str]) -> Vec<Key> {
        tokens
            .iter()
            .flat_map(|t| Key::parse_token(t).unwrap())
            .collect()
    }

    fn run(tokens: &[&str]) -> Session {
        Session::default().press_all(keys(tokens)).unwrap()
    }

    #[test]
    fn chained_operators_evaluate_left_to_right() {
        let session = run(&["2", "+", "3", "×", "4", "="]);
        assert_eq!(session.current, "20");
        assert!(session.pending.is_none());
        assert!(session.reset_on_input);
    }

    #[test]
    fn digit_after_result_starts_fresh() {
        let session = run(&["6", "÷", "3", "=", "7"]);
        assert_eq!(session.current, "7");
    }

    #[test]
    fn second_point_is_ignored() {
        let session = run(&["1", ".", "2", ".", "5"]);
        assert_eq!(session.current, "1.25");
    }

    #[test]
    fn operator_on_empty_entry_is_ignored() {
        let session = run(&["+"]);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn equals_without_operator_is_a_no_op() {
        let session = run(&["42", "="]);
        assert_eq!(session.current, "42");
        assert!(!session.reset_on_input);
    }

    #[test]
    fn pow_function_enters_two_step_flow() {
        let session = run(&["2", "pow"]);
        assert_eq!(session.previous, "2");
        assert_eq!(session.pending, Some(BinaryOp::Power));
        assert_eq!(session.display().previous, "2 ^");
        let session = session.press_all(keys(&["10", "="])).unwrap();
        assert_eq!(session.current, "1024");
    }

    #[test]
    fn function_keys_use_angle_mode() {
        let session = run(&["30", "sin"]);
        assert_abs_diff_eq!(session.current_value().unwrap(), 0.5, epsilon = 1e-12);
        let session = run(&["rad", "0", "cos"]);
        assert_eq!(session.current, "1");
        assert_eq!(session.angle_mode, AngleMode::Radians);
    }

    #[test]
    fn domain_error_leaves_state_untouched() {
        let before = run(&["5", "neg"]);
        let err = before.press(Key::Function(UnaryFunction::Factorial)).unwrap_err();
        assert!(matches!(err, EvalError::DomainError { .. }));
        assert_eq!(before.current, "-5");
    }

    #[test]
    fn memory_register() {
        let session = run(&["12", "m+", "c", "5", "m-", "c", "mr"]);
        assert_eq!(session.memory, 7.0);
        assert_eq!(session.current, "7");
        let session = session.press(Key::Memory(MemoryAction::Clear)).unwrap();
        assert_eq!(session.memory, 0.0);
    }

    #[test]
    fn clear_keeps_memory_and_angle_mode() {
        let session = run(&["rad", "9", "m+", "1", "+", "2", "c"]);
        assert_eq!(session.current, "");
        assert_eq!(session.previous, "");
        assert!(session.pending.is_none());
        assert_eq!(session.memory, 9.0);
        assert_eq!(session.angle_mode, AngleMode::Radians);
    }

    #[test]
    fn delete_and_constants() {
        let session = run(&["123", "del"]);
        assert_eq!(session.current, "12");
        let session = run(&["pi"]);
        assert_eq!(session.current_value(), Some(std::f64::consts::PI));
    }

    #[test]
    fn display_groups_digits() {
        let session = run(&["1234567", "+"]);
        let display = session.display();
        assert_eq!(display.current, "");
        assert_eq!(display.previous, "1,234,567 +");
    }

    #[test]
    fn press_does_not_mutate_receiver() {
        let start = run(&["8"]);
        let _ = start.press(Key::Digit('9')).unwrap();
        assert_eq!(start.current, "8");
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(matches!(
            Key::parse_token("sinh"),
            Err(EvalError::UnknownKey(_))
        ));
    }
}
