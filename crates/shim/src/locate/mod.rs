//! Runtime locator.
//!
//! Three strategies behind one interface, `locate(base, name)`:
//! - `FixedPath`: `<base>/<suffix>`, must exist.
//! - `PatternSearch`: first directory in `<base>/..` named `<prefix><d><sep><d>...`.
//! - `UpwardProbe`: `<dir>/<suffix>` for `dir` = base and each ancestor.
//!
//! Filesystem layout per variant is listed in `crate::variant`.

mod fixed;
mod pattern;
mod upward;

pub use fixed::FixedPath;
pub use pattern::PatternSearch;
pub use upward::UpwardProbe;

use std::fmt;

/// Safety bound on upward probing; not a semantic limit on directory depth.
pub const MAX_PROBE_ITERATIONS: usize = 500;

/// The strategy ran out of candidates. Carries every path it looked at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotFound {
    pub searched: Vec<String>,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not found in {} location(s)", self.searched.len())
    }
}

impl std::error::Error for NotFound {}

pub trait Locate {
    /// Resolve the runtime path for a launcher in `base_directory`.
    fn locate(&self, base_directory: &str, program_name: &str) -> Result<String, NotFound>;
}

/// Locator policy, selected per launcher variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy<'a> {
    Fixed(FixedPath<'a>),
    Pattern(PatternSearch<'a>),
    Upward(UpwardProbe<'a>),
}

impl Strategy<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::Pattern(_) => "pattern",
            Self::Upward(_) => "upward",
        }
    }

    /// Human-readable layout, e.g. `<base>/bin/python/python.exe`.
    pub fn describe(&self) -> String {
        match self {
            Self::Fixed(f) => format!("<base>/{}", f.suffix.join("/")),
            Self::Pattern(p) => format!(
                "<base>/../{}<d>{}<d>*/{}",
                p.prefix,
                p.separator,
                p.runtime.join("/")
            ),
            Self::Upward(u) => format!("<base or ancestor>/{}", u.suffix.join("/")),
        }
    }
}

impl Locate for Strategy<'_> {
    fn locate(&self, base_directory: &str, program_name: &str) -> Result<String, NotFound> {
        match self {
            Self::Fixed(s) => s.locate(base_directory, program_name),
            Self::Pattern(s) => s.locate(base_directory, program_name),
            Self::Upward(s) => s.locate(base_directory, program_name),
        }
    }
}

#[cfg(test)]
mod tests;
