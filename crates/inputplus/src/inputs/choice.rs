use inputplus_validate::ChoiceRule;

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask for one of the rule's choices and return the canonical choice.
    ///
    /// Without prompt text, shows `Please select one of: a, b, c.` on its
    /// own line.
    pub fn input_choice(&self, rule: ChoiceRule) -> Result<String, PromptError> {
        rule.validate_params()?;
        let text =
            self.text_or(|| format!("Please select one of: {}.\n", rule.choices().join(", ")));
        let value = self.run(&text, &rule)?;
        Ok(canonical(&rule, value))
    }

    /// Like [`input_choice`](Self::input_choice), but the default prompt
    /// lists one choice per line.
    ///
    /// Lines are `1. a` for a numbered rule, `A. a` for a lettered rule and
    /// `* a` otherwise.
    pub fn input_menu(&self, rule: ChoiceRule) -> Result<String, PromptError> {
        rule.validate_params()?;
        let text = self.text_or(|| menu_text(&rule));
        let value = self.run(&text, &rule)?;
        Ok(canonical(&rule, value))
    }
}

fn canonical(rule: &ChoiceRule, value: String) -> String {
    match rule.resolve(&value) {
        Some(choice) => choice.to_string(),
        None => value,
    }
}

fn menu_text(rule: &ChoiceRule) -> String {
    let mut text = String::from("Please select one of the following:\n");
    for (i, choice) in rule.choices().iter().enumerate() {
        let marker = if rule.is_numbered() {
            format!("{}.", i + 1)
        } else if rule.is_lettered() {
            // validate_params caps lettered menus at 26 entries
            format!("{}.", char::from(b'A' + i as u8))
        } else {
            "*".to_string()
        };
        text.push_str(&marker);
        text.push(' ');
        text.push_str(choice);
        text.push('\n');
    }
    text
}
