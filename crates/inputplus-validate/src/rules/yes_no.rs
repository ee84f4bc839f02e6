//! Yes/no answers.

use crate::constraints::{Constraints, Prevalidated};
use crate::error::{ParamError, Rejection};
use crate::validator::Validator;

/// Accepts a yes word, a no word, or the first letter of either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesNoRule {
    yes: String,
    no: String,
    case_sensitive: bool,
}

impl Default for YesNoRule {
    fn default() -> Self {
        Self::new("yes", "no")
    }
}

impl YesNoRule {
    /// Use custom words, e.g. `oui` / `non`.
    pub fn new(yes: impl Into<String>, no: impl Into<String>) -> Self {
        Self {
            yes: yes.into(),
            no: no.into(),
            case_sensitive: false,
        }
    }

    /// Require exact case when matching the words.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Both words must be non-empty and distinguishable by first letter.
    pub fn validate_params(&self) -> Result<(), ParamError> {
        let initials = (self.yes.chars().next(), self.no.chars().next());
        let (Some(yes_initial), Some(no_initial)) = initials else {
            return Err(ParamError::invalid("yes and no words must not be empty"));
        };
        if self.same(&yes_initial.to_string(), &no_initial.to_string()) {
            return Err(ParamError::invalid(format!(
                "'{}' and '{}' start with the same letter",
                self.yes, self.no
            )));
        }
        Ok(())
    }

    /// `Some(true)` for a yes answer, `Some(false)` for a no answer.
    pub fn answer(&self, candidate: &str) -> Option<bool> {
        if self.matches(candidate, &self.yes) {
            Some(true)
        } else if self.matches(candidate, &self.no) {
            Some(false)
        } else {
            None
        }
    }

    fn matches(&self, candidate: &str, word: &str) -> bool {
        let initial: String = word.chars().take(1).collect();
        self.same(candidate, word) || self.same(candidate, &initial)
    }

    fn same(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.to_lowercase() == b.to_lowercase()
        }
    }
}

impl Validator for YesNoRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }
        match self.answer(candidate) {
            Some(_) => Ok(()),
            None => Err(Rejection::new(format!(
                "'{candidate}' is not a valid {}/{} response.",
                self.yes, self.no
            ))),
        }
    }
}
