//! Choosing from a fixed list.

use std::collections::HashSet;

use crate::constraints::{Constraints, Prevalidated};
use crate::error::{ParamError, Rejection};
use crate::validator::Validator;

/// Accepts one of a fixed set of choices.
///
/// Matching is case-insensitive unless [`case_sensitive`](Self::case_sensitive)
/// is set. A numbered rule also accepts the 1-based position of a choice; a
/// lettered rule accepts `A`, `B`, ... for the first, second, ... choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRule {
    choices: Vec<String>,
    numbered: bool,
    lettered: bool,
    case_sensitive: bool,
}

impl ChoiceRule {
    /// Create a rule for the given choices.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            numbered: false,
            lettered: false,
            case_sensitive: false,
        }
    }

    /// Also accept `1`, `2`, ... for the choices.
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Also accept `A`, `B`, ... for the choices.
    pub fn lettered(mut self) -> Self {
        self.lettered = true;
        self
    }

    /// Require exact case when matching choice text.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn is_numbered(&self) -> bool {
        self.numbered
    }

    pub fn is_lettered(&self) -> bool {
        self.lettered
    }

    /// Reject empty or ambiguous choice lists.
    pub fn validate_params(&self) -> Result<(), ParamError> {
        if self.choices.is_empty() {
            return Err(ParamError::invalid("choices must not be empty"));
        }
        if self.numbered && self.lettered {
            return Err(ParamError::invalid(
                "numbered and lettered cannot both be set",
            ));
        }
        if self.lettered && self.choices.len() > 26 {
            return Err(ParamError::invalid(
                "lettered choices are limited to 26 entries",
            ));
        }

        let mut seen = HashSet::new();
        for choice in &self.choices {
            let key = if self.case_sensitive {
                choice.clone()
            } else {
                choice.to_lowercase()
            };
            if !seen.insert(key) {
                return Err(ParamError::invalid(format!(
                    "duplicate choice '{choice}'"
                )));
            }
        }

        Ok(())
    }

    /// Map a response to the choice it selects.
    ///
    /// Choice text is matched first, then numbers or letters.
    pub fn resolve(&self, candidate: &str) -> Option<&str> {
        let by_text = self.choices.iter().find(|choice| {
            if self.case_sensitive {
                choice.as_str() == candidate
            } else {
                choice.to_lowercase() == candidate.to_lowercase()
            }
        });
        if let Some(choice) = by_text {
            return Some(choice);
        }

        if self.numbered {
            if let Ok(n) = candidate.parse::<usize>() {
                if n >= 1 {
                    return self.choices.get(n - 1).map(String::as_str);
                }
            }
        }

        if self.lettered {
            let mut chars = candidate.chars();
            if let (Some(letter), None) = (chars.next(), chars.next()) {
                if letter.is_ascii_alphabetic() {
                    let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
                    return self.choices.get(index).map(String::as_str);
                }
            }
        }

        None
    }
}

impl Validator for ChoiceRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }

        match self.resolve(candidate) {
            Some(_) => Ok(()),
            None => Err(Rejection::new(format!(
                "'{candidate}' is not a valid choice."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> ChoiceRule {
        ChoiceRule::new(["a", "b", "c"])
    }

    #[test]
    fn accepts_choice() {
        assert!(abc().validate("b", &Constraints::new(false)).is_ok());
    }

    #[test]
    fn case_insensitive_by_default() {
        assert_eq!(abc().resolve("B"), Some("b"));
    }

    #[test]
    fn case_sensitive_when_asked() {
        let rule = abc().case_sensitive(true);
        assert_eq!(rule.resolve("B"), None);
        assert_eq!(rule.resolve("b"), Some("b"));
    }

    #[test]
    fn rejects_unknown() {
        let err = abc().validate("d", &Constraints::new(false)).unwrap_err();
        assert_eq!(err.reason(), "'d' is not a valid choice.");
    }

    #[test]
    fn numbered_resolves_positions() {
        let rule = ChoiceRule::new(["cat", "dog"]).numbered();
        assert_eq!(rule.resolve("2"), Some("dog"));
        assert_eq!(rule.resolve("0"), None);
        assert_eq!(rule.resolve("3"), None);
    }

    #[test]
    fn numbers_ignored_unless_numbered() {
        assert_eq!(ChoiceRule::new(["cat", "dog"]).resolve("1"), None);
    }

    #[test]
    fn lettered_resolves_letters() {
        let rule = ChoiceRule::new(["cat", "dog"]).lettered();
        assert_eq!(rule.resolve("A"), Some("cat"));
        assert_eq!(rule.resolve("b"), Some("dog"));
        assert_eq!(rule.resolve("c"), None);
    }

    #[test]
    fn text_match_wins_over_letter() {
        let rule = ChoiceRule::new(["b", "a"]).lettered();
        assert_eq!(rule.resolve("a"), Some("a"));
    }

    #[test]
    fn params_reject_empty() {
        let rule = ChoiceRule::new(Vec::<String>::new());
        assert!(rule.validate_params().is_err());
    }

    #[test]
    fn params_reject_duplicates() {
        assert!(ChoiceRule::new(["a", "A"]).validate_params().is_err());
        assert!(ChoiceRule::new(["a", "A"])
            .case_sensitive(true)
            .validate_params()
            .is_ok());
    }

    #[test]
    fn params_reject_numbered_and_lettered() {
        assert!(abc().numbered().lettered().validate_params().is_err());
    }

    #[test]
    fn params_reject_too_many_letters() {
        let many: Vec<String> = (0..27).map(|i| format!("choice {i}")).collect();
        assert!(ChoiceRule::new(many).lettered().validate_params().is_err());
    }
}
