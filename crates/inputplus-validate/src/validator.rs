//! The validation capability consumed by the prompt loop.

use crate::constraints::Constraints;
use crate::error::Rejection;

/// Something that can accept or reject a candidate string.
///
/// Implementations are expected to call [`Constraints::prevalidate`] first
/// and return early when it reports [`Prevalidated::Accepted`], so that the
/// blank flag and the whitelist/blacklist overrides behave the same for
/// every rule.
///
/// Closures with the signature `Fn(&str, &Constraints) -> Result<(), Rejection>`
/// implement this trait, which is handy for one-off rules and tests.
///
/// [`Prevalidated::Accepted`]: crate::Prevalidated::Accepted
///
/// # Example
///
/// ```
/// use inputplus_validate::{Constraints, Rejection, Validator};
///
/// let only_42 = |candidate: &str, _: &Constraints| {
///     if candidate == "42" {
///         Ok(())
///     } else {
///         Err(Rejection::new("Try 42."))
///     }
/// };
///
/// assert!(only_42.validate("42", &Constraints::default()).is_ok());
/// assert!(only_42.validate("41", &Constraints::default()).is_err());
/// ```
pub trait Validator {
    /// Check `candidate` under `constraints`.
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection>;
}

impl<F> Validator for F
where
    F: Fn(&str, &Constraints) -> Result<(), Rejection>,
{
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        self(candidate, constraints)
    }
}
