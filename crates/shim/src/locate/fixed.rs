use super::{Locate, NotFound};
use crate::paths;
use std::path::Path;

/// A statically known path under the launcher's directory. No search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPath<'a> {
    pub suffix: &'a [&'a str],
}

impl<'a> FixedPath<'a> {
    pub const fn new(suffix: &'a [&'a str]) -> Self {
        Self { suffix }
    }
}

impl Locate for FixedPath<'_> {
    fn locate(&self, base_directory: &str, _program_name: &str) -> Result<String, NotFound> {
        let candidate = paths::join(base_directory, self.suffix);
        let found = Path::new(&candidate).exists();
        tracing::debug!(candidate, found, "fixed probe");
        if found {
            Ok(candidate)
        } else {
            Err(NotFound {
                searched: vec![candidate],
            })
        }
    }
}
