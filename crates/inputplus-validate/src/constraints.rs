//! Constraints shared by every rule.
//!
//! A [`Constraints`] bundle carries the checks that run before any
//! rule-specific logic: whether blank input is allowed, patterns that force
//! acceptance, and patterns that force rejection.

use regex::{Regex, RegexBuilder};

use crate::error::{ParamError, Rejection};

/// Rejection text used for blacklist matches without a custom reason.
pub const DEFAULT_BLACKLIST_REASON: &str = "This response is invalid.";

/// Outcome of [`Constraints::prevalidate`] for a value that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prevalidated {
    /// The value is accepted outright; the rule must not inspect it further.
    Accepted,
    /// No override applied; the rule decides.
    Unresolved,
}

/// Blank-input flag plus whitelist and blacklist overrides.
///
/// Build with [`Constraints::compile`] so patterns are checked once, before
/// any input is read.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    blank: bool,
    whitelist: Vec<Regex>,
    blacklist: Vec<(Regex, Option<String>)>,
}

impl Constraints {
    /// Constraints with no overrides.
    pub fn new(blank: bool) -> Self {
        Self {
            blank,
            ..Self::default()
        }
    }

    /// Compile whitelist and blacklist patterns.
    ///
    /// Blacklist patterns match case-insensitively. Each blacklist entry may
    /// carry its own rejection text.
    pub fn compile<W, B>(blank: bool, whitelist: W, blacklist: B) -> Result<Self, ParamError>
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        B: IntoIterator<Item = (String, Option<String>)>,
    {
        let whitelist = whitelist
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let blacklist = blacklist
            .into_iter()
            .map(|(pattern, reason)| {
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (regex, reason))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            blank,
            whitelist,
            blacklist,
        })
    }

    /// Whether an empty string is valid input.
    pub fn allows_blank(&self) -> bool {
        self.blank
    }

    /// Run the shared checks on a value.
    ///
    /// Order: blank handling, then whitelist, then blacklist. A whitelist
    /// match wins over a blacklist match.
    pub fn prevalidate(&self, value: &str) -> Result<Prevalidated, Rejection> {
        if value.is_empty() {
            return if self.blank {
                Ok(Prevalidated::Accepted)
            } else {
                Err(Rejection::new("Blank values are not allowed."))
            };
        }

        if self.whitelist.iter().any(|regex| regex.is_match(value)) {
            return Ok(Prevalidated::Accepted);
        }

        for (regex, reason) in &self.blacklist {
            if regex.is_match(value) {
                let reason = reason.as_deref().unwrap_or(DEFAULT_BLACKLIST_REASON);
                return Err(Rejection::new(reason));
            }
        }

        Ok(Prevalidated::Unresolved)
    }
}
