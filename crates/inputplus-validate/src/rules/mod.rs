//! Built-in rule kinds.
//!
//! Each rule is its own type implementing [`Validator`](crate::Validator):
//!
//! - [`StrRule`] - shared constraints only
//! - [`NumRule`] - numbers with optional bounds
//! - [`ChoiceRule`] - one of a fixed list, optionally numbered or lettered
//! - [`DateRule`], [`TimeRule`], [`DateTimeRule`] - chrono format strings
//! - [`PathRule`] - filenames and file paths
//! - [`IpAddrRule`], [`UrlRule`] - network addresses
//! - [`RegexRule`], [`LiteralRegexRule`] - pattern matching
//! - [`YesNoRule`] - yes/no answers
//!
//! Rules with parameters expose `validate_params`, which callers run once
//! before prompting.

mod choice;
mod net;
mod num;
mod path;
mod pattern;
mod temporal;
mod text;
mod yes_no;

pub use choice::ChoiceRule;
pub use net::{IpAddrRule, UrlRule};
pub use num::{NumBounds, NumKind, NumRule};
pub use path::{PathKind, PathRule};
pub use pattern::{LiteralRegexRule, RegexRule};
pub use temporal::{
    DateRule, DateTimeRule, TimeRule, DEFAULT_DATETIME_FORMATS, DEFAULT_DATE_FORMATS,
    DEFAULT_TIME_FORMATS,
};
pub use text::StrRule;
pub use yes_no::YesNoRule;
