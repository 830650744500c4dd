use super::{Locate, NotFound};
use crate::paths;
use std::fs;

/// Scan the parent of the launcher's directory for a version-named sibling.
///
/// Entries are visited in the order `read_dir` yields them, which is OS
/// defined. When several directories match, the first one visited wins; which
/// one that is, is not stable across platforms or filesystems.
///
/// The runtime path inside the match is returned without an existence probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternSearch<'a> {
    /// Literal name prefix, e.g. `python-`.
    pub prefix: &'a str,
    /// Character between the two version digits, e.g. `.`.
    pub separator: char,
    /// Path of the runtime inside the matched directory.
    pub runtime: &'a [&'a str],
}

impl<'a> PatternSearch<'a> {
    pub const fn new(prefix: &'a str, separator: char, runtime: &'a [&'a str]) -> Self {
        Self {
            prefix,
            separator,
            runtime,
        }
    }

    /// `<prefix>`, a digit, `<separator>`, a digit, then anything.
    pub fn matches(&self, name: &str) -> bool {
        let Some(rest) = name.strip_prefix(self.prefix) else {
            return false;
        };
        let mut chars = rest.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(major), Some(sep), Some(minor))
                if major.is_ascii_digit() && sep == self.separator && minor.is_ascii_digit()
        )
    }
}

impl Locate for PatternSearch<'_> {
    fn locate(&self, base_directory: &str, _program_name: &str) -> Result<String, NotFound> {
        let parent = paths::join(base_directory, &[".."]);
        let wanted = format!("{}<version>", self.prefix);
        let searched = || NotFound {
            searched: vec![paths::join(&parent, &[wanted.as_str()])],
        };
        let entries = match fs::read_dir(&parent) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(parent, %err, "cannot list parent directory");
                return Err(searched());
            }
        };
        for entry in entries.flatten() {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !self.matches(&name) || !entry.path().is_dir() {
                continue;
            }
            tracing::debug!(parent, name, "pattern match");
            let dir = paths::join(&parent, &[name.as_str()]);
            return Ok(paths::join(&dir, self.runtime));
        }
        Err(searched())
    }
}
