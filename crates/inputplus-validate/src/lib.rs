//! Validation rules for interactive prompts.
//!
//! `inputplus-validate` answers one question: is this candidate string
//! acceptable? It knows nothing about terminals, retries or timeouts; the
//! `inputplus` crate drives it from its prompt loop.
//!
//! # Quick Start
//!
//! ```
//! use inputplus_validate::{Constraints, NumBounds, NumKind, NumRule, Validator};
//!
//! let rule = NumRule::new(NumKind::Int, NumBounds::new().min(1).max(10));
//! rule.validate_params()?;
//!
//! let constraints = Constraints::new(false);
//! assert!(rule.validate("7", &constraints).is_ok());
//!
//! let rejection = rule.validate("15", &constraints).unwrap_err();
//! assert_eq!(rejection.reason(), "Number must be at maximum 10.");
//! # Ok::<(), inputplus_validate::ParamError>(())
//! ```
//!
//! # Architecture
//!
//! Every rule implements [`Validator`]. Rules first run the shared
//! [`Constraints`] (blank flag, whitelist, blacklist) and then their own
//! check:
//!
//! ```text
//! candidate
//! ├── blank?          → accept if allowed, else reject
//! ├── whitelist hit?  → accept
//! ├── blacklist hit?  → reject (custom or default reason)
//! └── rule check      → accept / reject
//! ```
//!
//! Rule parameters are checked separately with each rule's
//! `validate_params`, so a bad rule is reported before anyone is prompted.

mod constraints;
mod error;
pub mod rules;
mod validator;

pub use constraints::{Constraints, Prevalidated, DEFAULT_BLACKLIST_REASON};
pub use error::{ParamError, Rejection};
pub use rules::{
    ChoiceRule, DateRule, DateTimeRule, IpAddrRule, LiteralRegexRule, NumBounds, NumKind, NumRule,
    PathKind, PathRule, RegexRule, StrRule, TimeRule, UrlRule, YesNoRule,
};
pub use validator::Validator;
