use std::path::Path;

use crate::config::MATCH_ALL;

/// Decides which file names are counted.
///
/// Matching is a literal suffix test against `"." + token`, not an
/// extension parse: `py` accepts `archive.tar.py`, and `go` rejects
/// `main.go2`.
#[derive(Debug, Clone, Default)]
pub struct FileMatcher {
    suffixes: Vec<String>,
    match_all: bool,
}

impl FileMatcher {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        let match_all = tokens.iter().any(|t| t.as_ref() == MATCH_ALL);
        let suffixes = tokens
            .iter()
            .map(|t| format!(".{}", t.as_ref()))
            .collect();
        Self {
            suffixes,
            match_all,
        }
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.match_all || self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }

    /// Tests the base name of `path`; paths without one never match.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.is_match(&name.to_string_lossy()))
    }

    /// True when no file name can match.
    pub fn is_empty(&self) -> bool {
        !self.match_all && self.suffixes.is_empty()
    }
}
