//! Regular-expression rules.

use regex::Regex;

use crate::constraints::{Constraints, Prevalidated};
use crate::error::{ParamError, Rejection};
use crate::validator::Validator;

/// Accepts text matching a pattern (search semantics; anchor it for a full match).
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    reason: Option<String>,
}

impl RegexRule {
    /// Compile the pattern.
    pub fn new(pattern: &str) -> Result<Self, ParamError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            reason: None,
        })
    }

    /// Use custom text when a candidate does not match.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Get the source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validator for RegexRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }
        if self.regex.is_match(candidate) {
            return Ok(());
        }
        Err(match &self.reason {
            Some(reason) => Rejection::new(reason.clone()),
            None => Rejection::new(format!(
                "'{candidate}' does not match the specified pattern."
            )),
        })
    }
}

/// Accepts text that is itself a valid regular expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralRegexRule;

impl LiteralRegexRule {
    /// Compile a candidate that passed validation.
    pub fn compile(&self, candidate: &str) -> Result<Regex, regex::Error> {
        Regex::new(candidate)
    }
}

impl Validator for LiteralRegexRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }
        self.compile(candidate).map(|_| ()).map_err(|_| {
            Rejection::new(format!("'{candidate}' is not a valid regular expression."))
        })
    }
}
