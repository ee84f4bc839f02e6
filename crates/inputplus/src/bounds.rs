//! Deciding when a prompt must stop retrying.

use std::fmt;
use std::time::{Duration, Instant};

/// A limit that can end a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// More time than the configured timeout has passed.
    Timeout,
    /// The configured number of attempts has been used.
    RetryLimit,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::RetryLimit => write!(f, "retry limit"),
        }
    }
}

/// What the prompt loop should do after a rejected attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundCheck {
    /// No bound reached; show the rejection and ask again.
    Continue,
    /// A bound was reached and a default absorbs it.
    UseDefault(String),
    /// A bound was reached with no default to fall back on.
    Exceeded(Bound),
}

/// Check the timeout and the attempt limit.
///
/// The timeout is checked first, so an attempt that is both late and the
/// last allowed one reports [`Bound::Timeout`]. The timeout fires only when
/// strictly more than `timeout` has elapsed. `now` is passed in rather than
/// read here.
pub fn check_bounds(
    default: Option<&str>,
    start: Instant,
    now: Instant,
    timeout: Option<Duration>,
    tries: u32,
    limit: Option<u32>,
) -> BoundCheck {
    let stop = |bound: Bound| match default {
        Some(value) => BoundCheck::UseDefault(value.to_string()),
        None => BoundCheck::Exceeded(bound),
    };

    if let Some(timeout) = timeout {
        if now.saturating_duration_since(start) > timeout {
            return stop(Bound::Timeout);
        }
    }

    if let Some(limit) = limit {
        if tries >= limit {
            return stop(Bound::RetryLimit);
        }
    }

    BoundCheck::Continue
}
