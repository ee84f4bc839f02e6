//! Free-form text.

use crate::constraints::Constraints;
use crate::error::Rejection;
use crate::validator::Validator;

/// Accepts any text that passes the shared constraints.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrRule;

impl Validator for StrRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        constraints.prevalidate(candidate).map(|_| ())
    }
}
