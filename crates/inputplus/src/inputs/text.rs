use inputplus_validate::StrRule;

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask for any text. Only the shared constraints apply.
    pub fn input_str(&self) -> Result<String, PromptError> {
        self.ask(&StrRule)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MockTerminal, Prompt, PromptError};

    #[test]
    fn returns_text() {
        let p = Prompt::with_terminal(MockTerminal::with_response("  Alice  ")).text("Name: ");
        assert_eq!(p.input_str().unwrap(), "Alice");
    }

    #[test]
    fn blacklist_then_accept() {
        let p = Prompt::with_terminal(MockTerminal::with_responses(["root", "alice"]))
            .blacklist("^root$");
        assert_eq!(p.input_str().unwrap(), "alice");
        assert_eq!(p.terminal().lines(), vec!["This response is invalid."]);
    }

    #[test]
    fn blank_rejected_until_limit() {
        let p = Prompt::with_terminal(MockTerminal::with_responses(["", ""])).limit(2);
        assert!(matches!(p.input_str(), Err(PromptError::RetryLimit)));
    }
}
