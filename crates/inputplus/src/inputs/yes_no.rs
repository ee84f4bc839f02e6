use inputplus_validate::YesNoRule;

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask a yes/no question and return the answer's first letter,
    /// uppercased (`"Y"` or `"N"` with the default words).
    pub fn input_yes_no(&self, rule: YesNoRule) -> Result<String, PromptError> {
        rule.validate_params()?;
        let value = self.ask(&rule)?;
        Ok(value.chars().take(1).flat_map(char::to_uppercase).collect())
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
    fn yes_and_no() {
        assert_eq!(prompt(&["yes"]).input_yes_no(YesNoRule::default()).unwrap(), "Y");
        assert_eq!(prompt(&["n"]).input_yes_no(YesNoRule::default()).unwrap(), "N");
    }

    #[test]
    fn retries_on_other_answers() {
        let p = prompt(&["maybe", "Y"]);
        assert_eq!(p.input_yes_no(YesNoRule::default()).unwrap(), "Y");
        assert_eq!(
            p.terminal().lines(),
            vec!["'maybe' is not a valid yes/no response."]
        );
    }

    #[test]
    fn custom_words() {
        let p = prompt(&["oui"]);
        assert_eq!(p.input_yes_no(YesNoRule::new("oui", "non")).unwrap(), "O");
    }

    #[test]
    fn ambiguous_words_rejected_before_io() {
        let p = prompt(&["y"]);
        let err = p.input_yes_no(YesNoRule::new("yes", "yep")).unwrap_err();
        assert!(matches!(err, PromptError::InvalidParams(_)));
        assert_eq!(p.terminal().reads(), 0);
    }
}
