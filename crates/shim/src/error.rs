//! Terminal failures of a launch and their exit codes.

use std::fmt;
use std::io;

/// Exit code when the runtime or the companion file cannot be found.
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit code when the child's exit status cannot be read.
pub const EXIT_CODE_UNAVAILABLE: i32 = -1;
/// Exit code when the wait primitive reports a timeout.
pub const EXIT_WAIT_TIMEOUT: i32 = -2;
/// Exit code when the OS refuses to create the child.
pub const EXIT_SPAWN_FAILED: i32 = -3;
/// Exit code when the invocation itself cannot be read (non-Unicode paths, no own path).
pub const EXIT_MALFORMED: i32 = -4;

/// Every error is terminal: the launcher reports it and exits, there is no retry.
#[derive(Debug)]
pub enum LaunchError {
    MalformedInvocation { reason: String },
    RuntimeNotFound { searched: Vec<String> },
    CompanionNotFound { path: String },
    SpawnFailed { command_line: String, source: io::Error },
}

impl LaunchError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInvocation {
            reason: reason.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedInvocation { .. } => EXIT_MALFORMED,
            Self::RuntimeNotFound { .. } | Self::CompanionNotFound { .. } => EXIT_NOT_FOUND,
            Self::SpawnFailed { .. } => EXIT_SPAWN_FAILED,
        }
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInvocation { reason } => write!(f, "malformed invocation: {reason}"),
            Self::RuntimeNotFound { searched } => {
                write!(f, "cannot find runtime; searched: ")?;
                for (i, path) in searched.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{path}\"")?;
                }
                Ok(())
            }
            Self::CompanionNotFound { path } => write!(f, "cannot find \"{path}\""),
            Self::SpawnFailed {
                command_line,
                source,
            } => write!(f, "failed to start `{command_line}`: {source}"),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SpawnFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_every_searched_path() {
        let err = LaunchError::RuntimeNotFound {
            searched: vec!["/a/b/bin/python".into(), "/a/bin/python".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"/a/b/bin/python\""));
        assert!(msg.contains("\"/a/bin/python\""));
        assert_eq!(err.exit_code(), EXIT_NOT_FOUND);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            EXIT_NOT_FOUND,
            EXIT_CODE_UNAVAILABLE,
            EXIT_WAIT_TIMEOUT,
            EXIT_SPAWN_FAILED,
            EXIT_MALFORMED,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
