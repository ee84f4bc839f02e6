//! Filenames and file paths.

use std::path::Path;

use crate::constraints::{Constraints, Prevalidated};
use crate::error::Rejection;
use crate::validator::Validator;

const FILENAME_FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];
const FILEPATH_FORBIDDEN: &[char] = &['*', '?', '"', '<', '>', '|'];

/// Whether a [`PathRule`] accepts a bare name or a full path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A single path component: no separators.
    Filename,
    /// A relative or absolute path.
    Filepath,
}

/// Accepts filenames or file paths, optionally requiring them to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRule {
    kind: PathKind,
    must_exist: bool,
}

impl PathRule {
    /// A rule for a single path component.
    pub fn filename() -> Self {
        Self {
            kind: PathKind::Filename,
            must_exist: false,
        }
    }

    /// A rule for a relative or absolute path.
    pub fn filepath() -> Self {
        Self {
            kind: PathKind::Filepath,
            must_exist: false,
        }
    }

    /// Require the path to exist on disk.
    pub fn must_exist(mut self, must_exist: bool) -> Self {
        self.must_exist = must_exist;
        self
    }

    /// Get whether this rule accepts names or paths.
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    fn is_well_formed(&self, candidate: &str) -> bool {
        if candidate.chars().any(char::is_control) {
            return false;
        }
        match self.kind {
            PathKind::Filename => !candidate.contains(FILENAME_FORBIDDEN),
            PathKind::Filepath => {
                // A colon is only valid as a drive prefix such as `C:`.
                let has_drive = candidate.starts_with(|c: char| c.is_ascii_alphabetic());
                let rest = match candidate.char_indices().nth(1) {
                    Some((idx, ':')) if has_drive => &candidate[idx + 1..],
                    _ => candidate,
                };
                !rest.contains(FILEPATH_FORBIDDEN) && !rest.contains(':')
            }
        }
    }
}

impl Validator for PathRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }

        if !self.is_well_formed(candidate) {
            let what = match self.kind {
                PathKind::Filename => "filename",
                PathKind::Filepath => "file path",
            };
            return Err(Rejection::new(format!(
                "'{candidate}' is not a valid {what}."
            )));
        }

        if self.must_exist && !Path::new(candidate).exists() {
            return Err(Rejection::new(format!("'{candidate}' does not exist.")));
        }

        Ok(())
    }
}
