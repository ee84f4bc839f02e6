//! Terminal input and output.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Check if stdin is a terminal.
    fn is_terminal(&self) -> bool;

    /// Write prompt text to stdout without a trailing newline.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Write a full line to stdout.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Read a line from stdin, including its line terminator.
    ///
    /// An empty string means end of input.
    fn read_line(&self) -> io::Result<String>;
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Mock terminal for testing prompts.
///
/// Returns scripted responses in order, then end of input. Everything the
/// prompt writes is recorded and can be inspected with
/// [`output`](Self::output) and [`lines`](Self::lines).
#[derive(Debug)]
pub struct MockTerminal {
    is_terminal: bool,
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    written: Mutex<Vec<Written>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Written {
    Prompt(String),
    Line(String),
}

impl Clone for MockTerminal {
    fn clone(&self) -> Self {
        Self {
            is_terminal: self.is_terminal,
            responses: self.responses.clone(),
            response_index: AtomicUsize::new(self.response_index.load(Ordering::SeqCst)),
            written: Mutex::new(self.written().clone()),
        }
    }
}

impl MockTerminal {
    /// Create a mock terminal that returns the given response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// Create a mock terminal that returns multiple responses in sequence.
    ///
    /// Useful for testing retry scenarios.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            is_terminal: true,
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
            written: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that simulates EOF (Ctrl+D).
    pub fn eof() -> Self {
        Self::with_responses(Vec::<String>::new())
    }

    /// Report stdin as piped rather than a TTY.
    pub fn piped(mut self) -> Self {
        self.is_terminal = false;
        self
    }

    /// Number of lines read so far, including the end-of-input read.
    pub fn reads(&self) -> usize {
        self.response_index.load(Ordering::SeqCst)
    }

    /// Everything written, prompts and lines, concatenated.
    pub fn output(&self) -> String {
        self.written()
            .iter()
            .map(|w| match w {
                Written::Prompt(p) => p.clone(),
                Written::Line(l) => format!("{}\n", l),
            })
            .collect()
    }

    /// Only the full lines written, e.g. rejection reasons.
    pub fn lines(&self) -> Vec<String> {
        self.written()
            .iter()
            .filter_map(|w| match w {
                Written::Line(l) => Some(l.clone()),
                Written::Prompt(_) => None,
            })
            .collect()
    }

    /// Only the prompt texts written.
    pub fn prompts(&self) -> Vec<String> {
        self.written()
            .iter()
            .filter_map(|w| match w {
                Written::Prompt(p) => Some(p.clone()),
                Written::Line(_) => None,
            })
            .collect()
    }

    fn written(&self) -> std::sync::MutexGuard<'_, Vec<Written>> {
        self.written.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TerminalIO for MockTerminal {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        self.written().push(Written::Prompt(prompt.to_string()));
        Ok(())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        self.written().push(Written::Line(line.to_string()));
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}
