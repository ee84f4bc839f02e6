//! Error types for validation.

use thiserror::Error;

/// Reason a candidate was rejected.
///
/// Rejections are expected during prompting: the prompt loop shows the
/// reason to the user and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Rejection {
    reason: String,
}

impl Rejection {
    /// Create a rejection with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The text shown to the user.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors raised when a rule or a constraint bundle is malformed.
///
/// These are programmer errors and are reported before any prompting.
#[derive(Debug, Error)]
pub enum ParamError {
    /// A whitelist, blacklist or rule pattern failed to compile.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Rule parameters are inconsistent.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl ParamError {
    /// Create an invalid-parameters error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }
}
