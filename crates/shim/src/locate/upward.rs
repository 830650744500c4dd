use super::{Locate, NotFound, MAX_PROBE_ITERATIONS};
use crate::paths;
use std::path::Path;

/// Walk from the launcher's directory towards the root, probing a fixed suffix.
///
/// Probes `<base>/<suffix>` first, then strips one component per step. Once
/// the last separator is gone the empty prefix probes `/<suffix>` (the root)
/// and the walk ends. Relative bases stop at their first component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpwardProbe<'a> {
    pub suffix: &'a [&'a str],
    pub max_iterations: usize,
}

impl<'a> UpwardProbe<'a> {
    pub const fn new(suffix: &'a [&'a str]) -> Self {
        Self {
            suffix,
            max_iterations: MAX_PROBE_ITERATIONS,
        }
    }
}

impl Locate for UpwardProbe<'_> {
    fn locate(&self, base_directory: &str, _program_name: &str) -> Result<String, NotFound> {
        let mut prefix = base_directory;
        let mut searched = Vec::new();
        for _ in 0..self.max_iterations {
            let candidate = paths::join(prefix, self.suffix);
            let found = Path::new(&candidate).exists();
            tracing::debug!(candidate, found, "upward probe");
            if found {
                return Ok(candidate);
            }
            searched.push(candidate);
            match paths::strip_last_component(prefix) {
                Some(parent) => prefix = parent,
                None => break,
            }
        }
        Err(NotFound { searched })
    }
}
