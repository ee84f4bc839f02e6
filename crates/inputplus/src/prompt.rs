//! The prompt builder and its retry loop.
//!
//! A [`Prompt`] holds the configuration for one kind of question. Calling
//! [`Prompt::ask`] runs a session: show the prompt, read a line, strip and
//! transform it, validate it, and either return, fall back to the default,
//! give up with a bound error, or show the rejection and ask again.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use inputplus_validate::{Constraints, Validator};
use tracing::{debug, trace};

use crate::bounds::{check_bounds, BoundCheck};
use crate::env::{Clock, SystemClock};
use crate::terminal::{RealTerminal, TerminalIO};
use crate::PromptError;

/// Function applied to input before or after validation.
pub type Transform = Arc<dyn Fn(String) -> String + Send + Sync>;

/// How surrounding characters are removed from each response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Strip {
    /// Keep the response as typed (minus the line terminator).
    Disabled,
    /// Trim leading and trailing whitespace.
    #[default]
    Whitespace,
    /// Trim any of these characters from both ends.
    Chars(String),
}

impl Strip {
    /// Apply the policy.
    pub fn apply<'a>(&self, value: &'a str) -> &'a str {
        match self {
            Self::Disabled => value,
            Self::Whitespace => value.trim(),
            Self::Chars(chars) => value.trim_matches(|c: char| chars.contains(c)),
        }
    }
}

/// State for a single call to [`Prompt::ask`].
struct Session {
    start: Instant,
    tries: u32,
}

/// A configured prompt.
///
/// Build one with the chained setters, then call [`ask`](Self::ask) with a
/// validator or one of the typed `input_*` methods.
///
/// # Example
///
/// ```
/// use inputplus::{MockTerminal, Prompt};
/// use inputplus_validate::NumBounds;
///
/// let prompt = Prompt::with_terminal(MockTerminal::with_responses(["15", "7"]))
///     .text("Pick a number: ")
///     .limit(3);
///
/// let n = prompt.input_int(NumBounds::new().min(1).max(10))?;
/// assert_eq!(n, 7);
/// assert_eq!(prompt.terminal().lines(), vec!["Number must be at maximum 10."]);
/// # Ok::<(), inputplus::PromptError>(())
/// ```
pub struct Prompt<T: TerminalIO = RealTerminal, C: Clock = SystemClock> {
    terminal: Arc<T>,
    clock: Arc<C>,
    text: Option<String>,
    default: Option<String>,
    blank: bool,
    timeout: Option<Duration>,
    limit: Option<u32>,
    strip: Strip,
    whitelist: Vec<String>,
    blacklist: Vec<(String, Option<String>)>,
    apply: Option<Transform>,
    post_apply: Option<Transform>,
}

impl Prompt<RealTerminal, SystemClock> {
    /// Create a prompt on the real terminal.
    pub fn new() -> Self {
        Self::with_terminal(RealTerminal)
    }
}

impl Default for Prompt<RealTerminal, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TerminalIO> Prompt<T, SystemClock> {
    /// Create a prompt with a custom terminal for testing.
    pub fn with_terminal(terminal: T) -> Self {
        Self {
            terminal: Arc::new(terminal),
            clock: Arc::new(SystemClock),
            text: None,
            default: None,
            blank: false,
            timeout: None,
            limit: None,
            strip: Strip::default(),
            whitelist: Vec::new(),
            blacklist: Vec::new(),
            apply: None,
            post_apply: None,
        }
    }
}

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Replace the clock used for timeouts.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Prompt<T, C2> {
        Prompt {
            terminal: self.terminal,
            clock: Arc::new(clock),
            text: self.text,
            default: self.default,
            blank: self.blank,
            timeout: self.timeout,
            limit: self.limit,
            strip: self.strip,
            whitelist: self.whitelist,
            blacklist: self.blacklist,
            apply: self.apply,
            post_apply: self.post_apply,
        }
    }

    /// Text shown before each read. No newline is added.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Value returned for blank input, or when a bound is reached.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Allow an empty response to pass validation.
    ///
    /// Has no effect on blank input when a default is set: the default is
    /// returned first.
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// Give up once more than `timeout` has passed since the first prompt.
    ///
    /// Checked only after a rejected response; it does not interrupt a read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Give up after `limit` rejected responses.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// How to strip each response. Default is [`Strip::Whitespace`].
    pub fn strip(mut self, strip: Strip) -> Self {
        self.strip = strip;
        self
    }

    /// Accept any response matching `pattern`, skipping the rule.
    pub fn whitelist(mut self, pattern: impl Into<String>) -> Self {
        self.whitelist.push(pattern.into());
        self
    }

    /// Reject any response matching `pattern` (case-insensitive).
    pub fn blacklist(mut self, pattern: impl Into<String>) -> Self {
        self.blacklist.push((pattern.into(), None));
        self
    }

    /// Like [`blacklist`](Self::blacklist), with custom rejection text.
    pub fn blacklist_with_reason(
        mut self,
        pattern: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        self.blacklist.push((pattern.into(), Some(reason.into())));
        self
    }

    /// Transform each response before validation.
    pub fn apply<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.apply = Some(Arc::new(f));
        self
    }

    /// Transform the accepted response before returning it.
    pub fn post_apply<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.post_apply = Some(Arc::new(f));
        self
    }

    /// The terminal this prompt talks to.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// The clock used for timeouts.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub(crate) fn text_or(&self, fallback: impl FnOnce() -> String) -> String {
        self.text.clone().unwrap_or_else(fallback)
    }

    pub(crate) fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Check the configuration and compile the shared constraints.
    ///
    /// [`ask`](Self::ask) calls this before touching the terminal.
    pub fn check_config(&self) -> Result<Constraints, PromptError> {
        if self.timeout == Some(Duration::ZERO) {
            return Err(PromptError::config("timeout must be greater than zero"));
        }
        if self.limit == Some(0) {
            return Err(PromptError::config("limit must be at least 1"));
        }
        let constraints =
            Constraints::compile(self.blank, &self.whitelist, self.blacklist.iter().cloned())?;
        Ok(constraints)
    }

    /// Ask until `validator` accepts a response or a bound is reached.
    pub fn ask<V>(&self, validator: &V) -> Result<String, PromptError>
    where
        V: Validator + ?Sized,
    {
        let text = self.text.as_deref().unwrap_or("");
        self.run(text, validator)
    }

    /// The loop behind [`ask`](Self::ask), with the prompt text resolved.
    pub(crate) fn run<V>(&self, text: &str, validator: &V) -> Result<String, PromptError>
    where
        V: Validator + ?Sized,
    {
        let constraints = self.check_config()?;
        let mut session = Session {
            start: self.clock.now(),
            tries: 0,
        };

        loop {
            let raw = self.read_response(text)?;
            session.tries += 1;
            trace!(tries = session.tries, "read response");

            let stripped = self.strip.apply(&raw);

            if stripped.is_empty() {
                if let Some(default) = &self.default {
                    debug!(tries = session.tries, "blank response, using default");
                    return Ok(default.clone());
                }
            }

            let candidate = match &self.apply {
                Some(apply) => apply(stripped.to_string()),
                None => stripped.to_string(),
            };

            let rejection = match validator.validate(&candidate, &constraints) {
                Ok(()) => {
                    return Ok(match &self.post_apply {
                        Some(post_apply) => post_apply(candidate),
                        None => candidate,
                    });
                }
                Err(rejection) => rejection,
            };

            match check_bounds(
                self.default.as_deref(),
                session.start,
                self.clock.now(),
                self.timeout,
                session.tries,
                self.limit,
            ) {
                BoundCheck::Continue => {
                    debug!(tries = session.tries, reason = %rejection, "response rejected");
                    self.terminal
                        .write_line(rejection.reason())
                        .map_err(PromptError::Io)?;
                }
                BoundCheck::UseDefault(value) => {
                    debug!(tries = session.tries, "bound reached, using default");
                    return Ok(value);
                }
                BoundCheck::Exceeded(bound) => {
                    debug!(tries = session.tries, %bound, "bound reached");
                    return Err(bound.into());
                }
            }
        }
    }

    /// Show the prompt and read one line without its terminator.
    fn read_response(&self, text: &str) -> Result<String, PromptError> {
        self.terminal.write_prompt(text).map_err(PromptError::Io)?;
        let line = self.terminal.read_line().map_err(PromptError::Io)?;

        // Check for EOF (user pressed Ctrl+D)
        if line.is_empty() {
            return Err(PromptError::Cancelled);
        }

        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(line.to_string())
    }
}

impl<T: TerminalIO, C: Clock> Clone for Prompt<T, C> {
    fn clone(&self) -> Self {
        Self {
            terminal: Arc::clone(&self.terminal),
            clock: Arc::clone(&self.clock),
            text: self.text.clone(),
            default: self.default.clone(),
            blank: self.blank,
            timeout: self.timeout,
            limit: self.limit,
            strip: self.strip.clone(),
            whitelist: self.whitelist.clone(),
            blacklist: self.blacklist.clone(),
            apply: self.apply.clone(),
            post_apply: self.post_apply.clone(),
        }
    }
}

impl<T: TerminalIO, C: Clock> fmt::Debug for Prompt<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt")
            .field("text", &self.text)
            .field("default", &self.default)
            .field("blank", &self.blank)
            .field("timeout", &self.timeout)
            .field("limit", &self.limit)
            .field("strip", &self.strip)
            .field("whitelist", &self.whitelist)
            .field("blacklist", &self.blacklist)
            .field("has_apply", &self.apply.is_some())
            .field("has_post_apply", &self.post_apply.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use inputplus_validate::{Rejection, StrRule};

    use super::*;
    use crate::env::MockClock;
    use crate::terminal::MockTerminal;

    fn only_42(candidate: &str, _: &Constraints) -> Result<(), Rejection> {
        if candidate == "42" {
            Ok(())
        } else {
            Err(Rejection::new(format!("'{candidate}' is not 42.")))
        }
    }

    fn never(_: &str, _: &Constraints) -> Result<(), Rejection> {
        Err(Rejection::new("no"))
    }

    fn prompt(responses: &[&str]) -> Prompt<MockTerminal> {
        Prompt::with_terminal(MockTerminal::with_responses(responses.iter().copied()))
    }

    // === Strip ===

    #[test]
    fn strip_policies() {
        assert_eq!(Strip::Disabled.apply("  a  "), "  a  ");
        assert_eq!(Strip::Whitespace.apply("  a  "), "a");
        assert_eq!(Strip::Chars("-*".into()).apply("*-a-*"), "a");
        assert_eq!(Strip::Chars("-".into()).apply(" -a- "), " -a- ");
    }

    // === Success path ===

    #[test]
    fn returns_accepted_response() {
        let p = prompt(&["42"]).text("Answer: ");
        assert_eq!(p.ask(&only_42).unwrap(), "42");
        assert_eq!(p.terminal().prompts(), vec!["Answer: "]);
        assert!(p.terminal().lines().is_empty());
    }

    #[test]
    fn retries_until_accepted() {
        let p = prompt(&["1", "2", "42"]);
        assert_eq!(p.ask(&only_42).unwrap(), "42");
        assert_eq!(p.terminal().reads(), 3);
        assert_eq!(
            p.terminal().lines(),
            vec!["'1' is not 42.", "'2' is not 42."]
        );
    }

    #[test]
    fn prompt_repeated_each_attempt() {
        let p = prompt(&["x", "42"]).text("> ");
        p.ask(&only_42).unwrap();
        assert_eq!(p.terminal().output(), "> 'x' is not 42.\n> ");
    }

    #[test]
    fn strips_whitespace_by_default() {
        let p = prompt(&["   42  "]);
        assert_eq!(p.ask(&only_42).unwrap(), "42");
    }

    #[test]
    fn strip_disabled_keeps_spaces() {
        let p = prompt(&[" 42", "42"]).strip(Strip::Disabled);
        assert_eq!(p.ask(&only_42).unwrap(), "42");
        assert_eq!(p.terminal().reads(), 2);
    }

    #[test]
    fn windows_line_endings_removed() {
        let p = prompt(&["42\r"]).strip(Strip::Disabled);
        assert_eq!(p.ask(&only_42).unwrap(), "42");
    }

    // === Transforms ===

    #[test]
    fn apply_runs_before_validation() {
        let p = prompt(&["forty-two"]).apply(|s| {
            if s == "forty-two" {
                "42".to_string()
            } else {
                s
            }
        });
        assert_eq!(p.ask(&only_42).unwrap(), "42");
    }

    #[test]
    fn post_apply_runs_once_on_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let p = prompt(&["a", "b", "42"]).post_apply(move |s| {
            counter.fetch_add(1, Ordering::SeqCst);
            format!("<{s}>")
        });
        assert_eq!(p.ask(&only_42).unwrap(), "<42>");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    // === Defaults ===

    #[test]
    fn blank_with_default_skips_validation() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &str, _: &Constraints| -> Result<(), Rejection> {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(Rejection::new("no"))
        };
        let p = prompt(&[""]).default("9");
        assert_eq!(p.ask(&counting).unwrap(), "9");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(p.terminal().reads(), 1);
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let p = prompt(&["   "]).default("9");
        assert_eq!(p.ask(&never).unwrap(), "9");
    }

    #[test]
    fn blank_without_default_is_validated() {
        let p = prompt(&["", "ok"]);
        assert_eq!(p.ask(&StrRule).unwrap(), "ok");
        assert_eq!(p.terminal().lines(), vec!["Blank values are not allowed."]);
    }

    #[test]
    fn blank_allowed_returns_empty() {
        let p = prompt(&[""]).blank(true);
        assert_eq!(p.ask(&StrRule).unwrap(), "");
    }

    #[test]
    fn default_does_not_short_circuit_rejected_text() {
        let p = prompt(&["nope", "42"]).default("9");
        assert_eq!(p.ask(&only_42).unwrap(), "42");
    }

    #[test]
    fn default_absorbs_retry_limit() {
        let p = prompt(&["a", "b"]).default("9").limit(2);
        assert_eq!(p.ask(&never).unwrap(), "9");
        assert_eq!(p.terminal().reads(), 2);
    }

    // === Bounds ===

    #[test]
    fn retry_limit_after_exactly_limit_reads() {
        let p = prompt(&["a", "b", "c", "d"]).limit(3);
        let err = p.ask(&only_42).unwrap_err();
        assert!(matches!(err, PromptError::RetryLimit));
        assert_eq!(p.terminal().reads(), 3);
        assert_eq!(p.terminal().lines().len(), 2);
    }

    #[test]
    fn limit_of_one_gives_up_without_showing_reason() {
        let p = prompt(&["a"]).limit(1);
        assert!(matches!(p.ask(&never), Err(PromptError::RetryLimit)));
        assert!(p.terminal().lines().is_empty());
    }

    #[test]
    fn timeout_fires_after_elapsed() {
        let p = prompt(&["a", "b", "c"])
            .timeout(Duration::from_secs(15))
            .with_clock(MockClock::stepping(Duration::from_secs(10)));
        let err = p.ask(&never).unwrap_err();
        assert!(matches!(err, PromptError::Timeout));
        assert_eq!(p.terminal().reads(), 2);
    }

    #[test]
    fn timeout_wins_over_limit() {
        let p = prompt(&["a", "b"])
            .limit(2)
            .timeout(Duration::from_secs(5))
            .with_clock(MockClock::stepping(Duration::from_secs(4)));
        assert!(matches!(p.ask(&never), Err(PromptError::Timeout)));
    }

    #[test]
    fn default_absorbs_timeout() {
        let p = prompt(&["a"])
            .default("late")
            .timeout(Duration::from_secs(1))
            .with_clock(MockClock::stepping(Duration::from_secs(2)));
        assert_eq!(p.ask(&never).unwrap(), "late");
    }

    #[test]
    fn valid_late_answer_still_accepted() {
        let p = prompt(&["42"])
            .timeout(Duration::from_secs(1))
            .with_clock(MockClock::stepping(Duration::from_secs(60)));
        assert_eq!(p.ask(&only_42).unwrap(), "42");
    }

    // === Configuration and I/O errors ===

    #[test]
    fn eof_cancels() {
        let p = prompt(&[]);
        assert!(matches!(p.ask(&never), Err(PromptError::Cancelled)));
    }

    #[test]
    fn zero_limit_rejected_before_io() {
        let p = prompt(&["42"]).limit(0);
        assert!(matches!(p.ask(&only_42), Err(PromptError::InvalidConfig(_))));
        assert_eq!(p.terminal().reads(), 0);
        assert!(p.terminal().output().is_empty());
    }

    #[test]
    fn zero_timeout_rejected_before_io() {
        let p = prompt(&["42"]).timeout(Duration::ZERO);
        assert!(matches!(p.ask(&only_42), Err(PromptError::InvalidConfig(_))));
        assert_eq!(p.terminal().reads(), 0);
    }

    #[test]
    fn bad_whitelist_rejected_before_io() {
        let p = prompt(&["42"]).whitelist("(");
        assert!(matches!(p.ask(&only_42), Err(PromptError::InvalidParams(_))));
        assert_eq!(p.terminal().reads(), 0);
    }

    // === Whitelist / blacklist ===

    #[test]
    fn whitelist_and_blacklist_reach_validator() {
        let p = prompt(&["admin", "skip"])
            .blacklist_with_reason("^admin$", "Reserved name.")
            .whitelist("^skip$");
        assert_eq!(p.ask(&StrRule).unwrap(), "skip");
        assert_eq!(p.terminal().lines(), vec!["Reserved name."]);
    }

    #[test]
    fn debug_hides_closures() {
        let p = prompt(&[]).apply(|s| s);
        let debug = format!("{:?}", p);
        assert!(debug.contains("has_apply: true"));
    }
}
