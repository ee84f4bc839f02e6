//! Validated command-line prompts with retry limits and timeouts.
//!
//! `inputplus` asks the user for a line of text, checks it against a rule,
//! and keeps asking until the answer is valid, a default applies, or a time
//! or attempt budget runs out.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use inputplus::{Prompt, PromptError};
//! use inputplus_validate::{ChoiceRule, NumBounds};
//!
//! let age = Prompt::new()
//!     .text("Age: ")
//!     .limit(3)
//!     .input_int(NumBounds::new().min(0).max(150));
//!
//! match age {
//!     Ok(age) => println!("{age}"),
//!     Err(PromptError::RetryLimit) => eprintln!("giving up"),
//!     Err(e) => eprintln!("{e}"),
//! }
//!
//! let flavour = Prompt::new()
//!     .default("vanilla")
//!     .timeout(Duration::from_secs(30))
//!     .input_menu(ChoiceRule::new(["vanilla", "chocolate"]).numbered())?;
//! # Ok::<(), PromptError>(())
//! ```
//!
//! # How a prompt runs
//!
//! ```text
//! show prompt, read line, tries += 1
//! ├── strip
//! ├── blank and default set?   → return default (no validation)
//! ├── apply transform
//! └── validate
//!     ├── accepted             → return post_apply(value)
//!     └── rejected → check bounds (timeout first, then limit)
//!         ├── none reached     → print reason, ask again
//!         ├── default set      → return default
//!         └── no default       → Err(Timeout) / Err(RetryLimit)
//! ```
//!
//! The timeout is only checked after a rejected answer; it never interrupts
//! a read that is waiting for the user.
//!
//! # Testing
//!
//! Prompts accept a mock terminal and a mock clock:
//!
//! ```
//! use std::time::Duration;
//!
//! use inputplus::{MockClock, MockTerminal, Prompt, PromptError};
//! use inputplus_validate::StrRule;
//!
//! let prompt = Prompt::with_terminal(MockTerminal::with_responses(["", ""]))
//!     .timeout(Duration::from_secs(5))
//!     .with_clock(MockClock::stepping(Duration::from_secs(10)));
//!
//! assert!(matches!(prompt.ask(&StrRule), Err(PromptError::Timeout)));
//! ```

mod bounds;
pub mod env;
mod error;
pub mod inputs;
mod prompt;
mod terminal;

pub use bounds::{check_bounds, Bound, BoundCheck};
pub use env::{Clock, MockClock, SystemClock};
pub use error::PromptError;
pub use inputs::Number;
pub use prompt::{Prompt, Strip, Transform};
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};

pub use inputplus_validate as validate;
