//! `inputplus` - ask one validated question from the command line.
//!
//! Each subcommand maps to one typed prompt. The global options configure
//! the retry loop shared by all of them. The accepted answer is printed on
//! stdout, so the binary can be used from shell scripts:
//!
//! ```bash
//! age=$(inputplus --limit 3 --text "Age: " int --min 0 --max 150)
//! ```

mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use inputplus::validate::{
    ChoiceRule, DateRule, DateTimeRule, NumBounds, RegexRule, TimeRule, YesNoRule,
};
use inputplus::{Clock, Prompt, PromptError, Strip, TerminalIO};
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "inputplus")]
#[command(version)]
#[command(about = "Ask a validated question, retrying until the answer is acceptable")]
struct Cli {
    #[command(flatten)]
    prompt: PromptArgs,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every prompt.
#[derive(Args, Debug, Default)]
struct PromptArgs {
    /// Text shown before each attempt
    #[arg(long, global = true)]
    text: Option<String>,

    /// Give up after this many seconds (checked after a rejected answer)
    #[arg(long, global = true, env = "INPUTPLUS_TIMEOUT", value_name = "SECS")]
    timeout: Option<f64>,

    /// Give up after this many rejected answers
    #[arg(long, global = true, env = "INPUTPLUS_LIMIT", value_name = "N")]
    limit: Option<u32>,

    /// Value used for an empty answer or when a limit is reached
    #[arg(long, global = true)]
    default: Option<String>,

    /// Accept an empty answer
    #[arg(long, global = true)]
    blank: bool,

    /// Keep surrounding whitespace
    #[arg(long, global = true, conflicts_with = "strip_chars")]
    no_strip: bool,

    /// Strip these characters instead of whitespace
    #[arg(long, global = true, value_name = "CHARS")]
    strip_chars: Option<String>,

    /// Accept any answer matching this regex
    #[arg(long = "allow", global = true, value_name = "REGEX")]
    allow: Vec<String>,

    /// Reject any answer matching this regex
    #[arg(long = "block", global = true, value_name = "REGEX")]
    block: Vec<String>,
}

impl PromptArgs {
    fn strip(&self) -> Strip {
        if self.no_strip {
            Strip::Disabled
        } else if let Some(chars) = &self.strip_chars {
            Strip::Chars(chars.clone())
        } else {
            Strip::Whitespace
        }
    }

    /// Apply the options to a prompt.
    fn configure<T: TerminalIO, C: Clock>(&self, prompt: Prompt<T, C>) -> Result<Prompt<T, C>> {
        let mut prompt = prompt.blank(self.blank).strip(self.strip());

        if let Some(text) = &self.text {
            prompt = prompt.text(text);
        }
        if let Some(default) = &self.default {
            prompt = prompt.default(default);
        }
        if let Some(limit) = self.limit {
            prompt = prompt.limit(limit);
        }
        if let Some(secs) = self.timeout {
            let timeout = Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid timeout: {secs}"))?;
            prompt = prompt.timeout(timeout);
        }
        for pattern in &self.allow {
            prompt = prompt.whitelist(pattern);
        }
        for pattern in &self.block {
            prompt = prompt.blacklist(pattern);
        }
        Ok(prompt)
    }
}

/// Numeric range options.
#[derive(Args, Debug, Default)]
struct RangeArgs {
    /// Smallest accepted value
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Largest accepted value
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Values must be strictly below this
    #[arg(long, allow_negative_numbers = true)]
    less_than: Option<f64>,

    /// Values must be strictly above this
    #[arg(long, allow_negative_numbers = true)]
    greater_than: Option<f64>,
}

impl RangeArgs {
    fn bounds(&self) -> NumBounds {
        NumBounds {
            min: self.min,
            max: self.max,
            less_than: self.less_than,
            greater_than: self.greater_than,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Any non-blank text
    Str,
    /// An integer or a decimal number
    Num(RangeArgs),
    /// An integer
    Int(RangeArgs),
    /// A decimal number
    Float(RangeArgs),
    /// One of a list of choices
    Choice {
        #[arg(required = true)]
        choices: Vec<String>,
        /// Match choices case-sensitively
        #[arg(long)]
        case_sensitive: bool,
    },
    /// One of a list of choices, shown as a menu
    Menu {
        #[arg(required = true)]
        choices: Vec<String>,
        /// Number the entries and accept their numbers
        #[arg(long, conflicts_with = "lettered")]
        numbered: bool,
        /// Letter the entries and accept their letters
        #[arg(long)]
        lettered: bool,
    },
    /// A calendar date
    Date {
        /// strftime format to accept (repeatable)
        #[arg(long = "format")]
        formats: Vec<String>,
    },
    /// A time of day
    Time {
        /// strftime format to accept (repeatable)
        #[arg(long = "format")]
        formats: Vec<String>,
    },
    /// A date and a time
    Datetime {
        /// strftime format to accept (repeatable)
        #[arg(long = "format")]
        formats: Vec<String>,
    },
    /// A file name without directories
    Filename {
        /// Require the file to exist
        #[arg(long)]
        must_exist: bool,
    },
    /// A file path
    Filepath {
        /// Require the file to exist
        #[arg(long)]
        must_exist: bool,
    },
    /// An IPv4 or IPv6 address
    Ip,
    /// A URL
    Url,
    /// Text matching a regular expression
    Regex {
        /// Pattern the answer must match
        pattern: String,
    },
    /// A regular expression
    LiteralRegex,
    /// A yes/no answer
    YesNo {
        /// Word meaning yes
        #[arg(long, default_value = "yes")]
        yes: String,
        /// Word meaning no
        #[arg(long, default_value = "no")]
        no: String,
    },
}

/// Run the prompt for `command` and format the answer for printing.
fn run<T: TerminalIO, C: Clock>(
    command: &Command,
    prompt: &Prompt<T, C>,
) -> Result<String, PromptError> {
    let answer = match command {
        Command::Str => prompt.input_str()?,
        Command::Num(range) => prompt.input_num(range.bounds())?.to_string(),
        Command::Int(range) => prompt.input_int(range.bounds())?.to_string(),
        Command::Float(range) => prompt.input_float(range.bounds())?.to_string(),
        Command::Choice {
            choices,
            case_sensitive,
        } => prompt.input_choice(ChoiceRule::new(choices).case_sensitive(*case_sensitive))?,
        Command::Menu {
            choices,
            numbered,
            lettered,
        } => {
            let mut rule = ChoiceRule::new(choices);
            if *numbered {
                rule = rule.numbered();
            }
            if *lettered {
                rule = rule.lettered();
            }
            prompt.input_menu(rule)?
        }
        Command::Date { formats } => {
            let rule = if formats.is_empty() {
                DateRule::default()
            } else {
                DateRule::new(formats)
            };
            prompt.input_date(rule)?.to_string()
        }
        Command::Time { formats } => {
            let rule = if formats.is_empty() {
                TimeRule::default()
            } else {
                TimeRule::new(formats)
            };
            prompt.input_time(rule)?.to_string()
        }
        Command::Datetime { formats } => {
            let rule = if formats.is_empty() {
                DateTimeRule::default()
            } else {
                DateTimeRule::new(formats)
            };
            prompt.input_datetime(rule)?.to_string()
        }
        Command::Filename { must_exist } => prompt.input_filename(*must_exist)?,
        Command::Filepath { must_exist } => {
            prompt.input_filepath(*must_exist)?.display().to_string()
        }
        Command::Ip => prompt.input_ip_addr()?.to_string(),
        Command::Url => prompt.input_url()?,
        Command::Regex { pattern } => prompt.input_regex(RegexRule::new(pattern)?)?,
        Command::LiteralRegex => prompt.input_literal_regex()?.as_str().to_string(),
        Command::YesNo { yes, no } => {
            prompt.input_yes_no(YesNoRule::new(yes.as_str(), no.as_str()))?
        }
    };
    Ok(answer)
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let prompt = cli.prompt.configure(Prompt::new())?;
    if !prompt.terminal().is_terminal() {
        warn!("stdin is not a terminal, reading answers from a pipe");
    }

    let answer = run(&cli.command, &prompt).context("no valid answer")?;
    println!("{answer}");
    Ok(())
}
