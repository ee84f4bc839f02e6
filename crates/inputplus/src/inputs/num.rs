use std::fmt;

use inputplus_validate::{NumBounds, NumKind, NumRule};

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

/// A number read by [`Prompt::input_num`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parse as a float when the text has a decimal point or exponent,
    /// otherwise as an integer.
    pub fn parse(text: &str) -> Option<Self> {
        if text.contains(['.', 'e', 'E']) {
            parse_finite(text).map(Self::Float)
        } else {
            text.parse()
                .ok()
                .map(Self::Int)
                .or_else(|| parse_finite(text).map(Self::Float))
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
        }
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask for an integer or a float.
    pub fn input_num(&self, bounds: NumBounds) -> Result<Number, PromptError> {
        let value = self.ask_number(NumKind::Num, bounds)?;
        Number::parse(&value).ok_or_else(|| PromptError::conversion(&value, "not a number"))
    }

    /// Ask for an integer.
    ///
    /// Values that skip the rule (defaults, whitelisted text) may be written
    /// as floats; they are truncated toward zero.
    pub fn input_int(&self, bounds: NumBounds) -> Result<i64, PromptError> {
        let value = self.ask_number(NumKind::Int, bounds)?;
        if let Ok(n) = value.parse::<i64>() {
            return Ok(n);
        }
        parse_finite(&value)
            .map(f64::trunc)
            .filter(|n| *n >= i64::MIN as f64 && *n <= i64::MAX as f64)
            .map(|n| n as i64)
            .ok_or_else(|| PromptError::conversion(&value, "not an integer"))
    }

    /// Ask for a float.
    pub fn input_float(&self, bounds: NumBounds) -> Result<f64, PromptError> {
        let value = self.ask_number(NumKind::Float, bounds)?;
        parse_finite(&value).ok_or_else(|| PromptError::conversion(&value, "not a number"))
    }

    fn ask_number(&self, kind: NumKind, bounds: NumBounds) -> Result<String, PromptError> {
        let rule = NumRule::new(kind, bounds);
        rule.validate_params()?;
        self.ask(&rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTerminal;

    fn prompt(responses: &[&str]) -> Prompt<MockTerminal> {
        Prompt::with_terminal(MockTerminal::with_responses(responses.iter().copied()))
    }

    #[test]
    fn number_parse() {
        assert_eq!(Number::parse("3"), Some(Number::Int(3)));
        assert_eq!(Number::parse("3.5"), Some(Number::Float(3.5)));
        assert_eq!(Number::parse("1e3"), Some(Number::Float(1000.0)));
        assert_eq!(Number::parse("three"), None);
    }

    #[test]
    fn number_display() {
        assert_eq!(Number::Int(7).to_string(), "7");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Int(2).as_f64(), 2.0);
    }

    #[test]
    fn int_with_range() {
        let p = prompt(&["15", "7"]);
        assert_eq!(p.input_int(NumBounds::new().min(1).max(10)).unwrap(), 7);
        assert_eq!(p.terminal().lines(), vec!["Number must be at maximum 10."]);
    }

    #[test]
    fn int_rejects_float_text() {
        let p = prompt(&["2.5", "2"]);
        assert_eq!(p.input_int(NumBounds::new()).unwrap(), 2);
        assert_eq!(p.terminal().lines(), vec!["'2.5' is not an integer."]);
    }

    #[test]
    fn int_default_written_as_float() {
        let p = prompt(&[""]).default("3.9");
        assert_eq!(p.input_int(NumBounds::new()).unwrap(), 3);
    }

    #[test]
    fn num_returns_matching_variant() {
        assert_eq!(
            prompt(&["4"]).input_num(NumBounds::new()).unwrap(),
            Number::Int(4)
        );
        assert_eq!(
            prompt(&["4.25"]).input_num(NumBounds::new()).unwrap(),
            Number::Float(4.25)
        );
    }

    #[test]
    fn float_with_exclusive_bound() {
        let p = prompt(&["0", "0.1"]);
        let value = p
            .input_float(NumBounds::new().greater_than(0))
            .unwrap();
        assert_eq!(value, 0.1);
    }

    #[test]
    fn bad_bounds_rejected_before_io() {
        let p = prompt(&["5"]);
        let err = p.input_int(NumBounds::new().min(10).max(1)).unwrap_err();
        assert!(matches!(err, PromptError::InvalidParams(_)));
        assert_eq!(p.terminal().reads(), 0);
    }

    #[test]
    fn whitelisted_text_fails_conversion() {
        let p = prompt(&["none"]).whitelist("^none$");
        let err = p.input_int(NumBounds::new()).unwrap_err();
        assert!(matches!(err, PromptError::Conversion { .. }));
    }
}
