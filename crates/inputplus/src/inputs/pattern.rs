use inputplus_validate::{LiteralRegexRule, RegexRule};
use regex::Regex;

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask for text matching the rule's pattern.
    ///
    /// Build the rule with [`RegexRule::new`], which reports a bad pattern
    /// before anything is shown.
    pub fn input_regex(&self, rule: RegexRule) -> Result<String, PromptError> {
        self.ask(&rule)
    }

    /// Ask for a regular expression and return it compiled.
    pub fn input_literal_regex(&self) -> Result<Regex, PromptError> {
        let rule = LiteralRegexRule;
        let value = self.ask(&rule)?;
        rule.compile(&value)
            .map_err(|e| PromptError::conversion(&value, e))
    }
}
