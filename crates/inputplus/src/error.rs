//! Error types for prompting.

use std::io;

use inputplus_validate::ParamError;

use crate::bounds::Bound;

/// Errors that can end a prompt.
///
/// Validation rejections are not errors: the prompt shows them and asks
/// again. What escapes is a bound being hit without a default, bad
/// configuration, or a broken terminal.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The time budget ran out before valid input arrived.
    #[error("Timed out waiting for valid input.")]
    Timeout,

    /// Every allowed attempt was used without valid input.
    #[error("Retry limit reached without valid input.")]
    RetryLimit,

    /// The prompt itself is misconfigured.
    #[error("Invalid prompt configuration: {0}")]
    InvalidConfig(String),

    /// The rule or constraint parameters are malformed.
    #[error(transparent)]
    InvalidParams(#[from] ParamError),

    /// Input ended (Ctrl+D or closed stdin) before valid input arrived.
    #[error("Input ended before a valid response was entered.")]
    Cancelled,

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[source] io::Error),

    /// An accepted value could not be converted to the requested type.
    ///
    /// Only whitelisted or default values skip the rule, so only they can
    /// land here.
    #[error("Cannot convert '{value}': {reason}")]
    Conversion { value: String, reason: String },
}

impl PromptError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a conversion error.
    pub fn conversion(value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Conversion {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this is one of the bounded-failure signals.
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Timeout | Self::RetryLimit)
    }
}

impl From<Bound> for PromptError {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Timeout => Self::Timeout,
            Bound::RetryLimit => Self::RetryLimit,
        }
    }
}
