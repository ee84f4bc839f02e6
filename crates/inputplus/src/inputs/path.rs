use std::path::PathBuf;

use inputplus_validate::PathRule;

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask for a single filename (no directory separators).
    pub fn input_filename(&self, must_exist: bool) -> Result<String, PromptError> {
        self.ask(&PathRule::filename().must_exist(must_exist))
    }

    /// Ask for a relative or absolute file path.
    pub fn input_filepath(&self, must_exist: bool) -> Result<PathBuf, PromptError> {
        self.ask(&PathRule::filepath().must_exist(must_exist))
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTerminal;

    #[test]
    fn filename_rejects_paths() {
        let p = Prompt::with_terminal(MockTerminal::with_responses(["a/b.txt", "b.txt"]));
        assert_eq!(p.input_filename(false).unwrap(), "b.txt");
        assert_eq!(p.terminal().lines(), vec!["'a/b.txt' is not a valid filename."]);
    }

    #[test]
    fn filepath_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("config.toml");
        std::fs::write(&present, "").unwrap();
        let missing = dir.path().join("nope.toml");

        let p = Prompt::with_terminal(MockTerminal::with_responses([
            missing.display().to_string(),
            present.display().to_string(),
        ]));
        assert_eq!(p.input_filepath(true).unwrap(), present);
        assert_eq!(p.terminal().lines().len(), 1);
    }
}
