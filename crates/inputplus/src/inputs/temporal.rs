use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use inputplus_validate::{DateRule, DateTimeRule, TimeRule};

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask for a date. `DateRule::default()` accepts `10/17/2026`,
    /// `2026/10/17` and two-digit-year variants.
    pub fn input_date(&self, rule: DateRule) -> Result<NaiveDate, PromptError> {
        rule.validate_params()?;
        let value = self.ask(&rule)?;
        rule.parse(&value)
            .ok_or_else(|| PromptError::conversion(&value, "not a valid date"))
    }

    /// Ask for a time of day.
    pub fn input_time(&self, rule: TimeRule) -> Result<NaiveTime, PromptError> {
        rule.validate_params()?;
        let value = self.ask(&rule)?;
        rule.parse(&value)
            .ok_or_else(|| PromptError::conversion(&value, "not a valid time"))
    }

    /// Ask for a date and a time of day.
    pub fn input_datetime(&self, rule: DateTimeRule) -> Result<NaiveDateTime, PromptError> {
        rule.validate_params()?;
        let value = self.ask(&rule)?;
        rule.parse(&value)
            .ok_or_else(|| PromptError::conversion(&value, "not a valid date and time"))
    }
}
