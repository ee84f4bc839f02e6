//! Typed prompts built on [`Prompt::ask`](crate::Prompt::ask).
//!
//! Each `input_*` method checks its rule parameters, optionally builds a
//! default prompt text, runs the loop, and converts the accepted text:
//!
//! - [`input_str`](crate::Prompt::input_str), [`input_url`](crate::Prompt::input_url),
//!   [`input_filename`](crate::Prompt::input_filename), [`input_regex`](crate::Prompt::input_regex) - `String`
//! - [`input_num`](crate::Prompt::input_num) - [`Number`]
//! - [`input_int`](crate::Prompt::input_int) / [`input_float`](crate::Prompt::input_float) - `i64` / `f64`
//! - [`input_choice`](crate::Prompt::input_choice) / [`input_menu`](crate::Prompt::input_menu) - the chosen entry
//! - [`input_date`](crate::Prompt::input_date), [`input_time`](crate::Prompt::input_time),
//!   [`input_datetime`](crate::Prompt::input_datetime) - chrono values
//! - [`input_filepath`](crate::Prompt::input_filepath) - `PathBuf`
//! - [`input_ip_addr`](crate::Prompt::input_ip_addr) - `IpAddr`
//! - [`input_literal_regex`](crate::Prompt::input_literal_regex) - `Regex`
//! - [`input_yes_no`](crate::Prompt::input_yes_no) - `"Y"` or `"N"` style initial
//!
//! Whitelisted responses and defaults skip the rule, so conversion can still
//! fail for them; that surfaces as [`PromptError::Conversion`](crate::PromptError::Conversion).

mod choice;
mod net;
mod num;
mod path;
mod pattern;
mod temporal;
mod text;
mod yes_no;

pub use num::Number;
