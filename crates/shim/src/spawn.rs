//! Process launcher/waiter: the seam to the OS spawn primitive.
//!
//! The child inherits the parent's standard streams and the calling thread
//! blocks until it exits. The child is never killed: a failed wait degrades to
//! a sentinel result and the child is left running.

use crate::cmdline;
use crate::compose::ComposedCommandLine;
use crate::error::{LaunchError, EXIT_CODE_UNAVAILABLE, EXIT_WAIT_TIMEOUT};
use std::io;
use std::process::Command;

/// Whether the child gets a console window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleMode {
    #[default]
    Inherit,
    /// No console window for the child (`CREATE_NO_WINDOW`); no-op off Windows.
    Hidden,
}

/// Outcome of waiting on the child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildResult {
    Exited(i32),
    /// The child ended but its exit status could not be read (or it was killed by a signal).
    ExitCodeUnavailable,
    /// The wait primitive reported a timeout.
    WaitTimedOut,
}

impl ChildResult {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Exited(code) => code,
            Self::ExitCodeUnavailable => EXIT_CODE_UNAVAILABLE,
            Self::WaitTimedOut => EXIT_WAIT_TIMEOUT,
        }
    }
}

pub trait Spawner {
    /// Spawn `command_line`, block until the child exits, report how it ended.
    fn spawn_and_wait(
        &self,
        command_line: &ComposedCommandLine,
    ) -> Result<ChildResult, LaunchError>;
}

/// `std::process` backed spawner.
///
/// `Child::wait` blocks without a deadline and does not surface the wait
/// primitive's timeout value as a distinct error, so in practice this spawner
/// never yields [`ChildResult::WaitTimedOut`]. The -2 sentinel comes only from
/// spawners that can observe that timeout themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemSpawner {
    pub console: ConsoleMode,
}

impl SystemSpawner {
    pub fn new(console: ConsoleMode) -> Self {
        Self { console }
    }

    /// Program token becomes the program; the rest is passed through untouched.
    #[cfg(windows)]
    fn command(&self, line: &str) -> io::Result<Command> {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;

        let split = cmdline::split_command_line(line);
        if split.program().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command line"));
        }
        let mut command = Command::new(split.program());
        if split.has_arguments() {
            command.raw_arg(&split.tail);
        }
        if self.console == ConsoleMode::Hidden {
            command.creation_flags(CREATE_NO_WINDOW);
        }
        Ok(command)
    }

    /// No raw command lines here: split back into argv with the Windows rules.
    #[cfg(not(windows))]
    fn command(&self, line: &str) -> io::Result<Command> {
        let mut args = cmdline::split_args(line).into_iter();
        let program = args
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command line"))?;
        let mut command = Command::new(program);
        command.args(args);
        Ok(command)
    }
}

impl Spawner for SystemSpawner {
    fn spawn_and_wait(
        &self,
        command_line: &ComposedCommandLine,
    ) -> Result<ChildResult, LaunchError> {
        let spawn_failed = |source: io::Error| LaunchError::SpawnFailed {
            command_line: command_line.to_string(),
            source,
        };
        let mut child = self
            .command(command_line.as_str())
            .and_then(|mut command| command.spawn())
            .map_err(spawn_failed)?;
        tracing::debug!(pid = child.id(), "child started");

        match child.wait() {
            Ok(status) => match status.code() {
                Some(code) => Ok(ChildResult::Exited(code)),
                None => {
                    tracing::warn!(%status, "child exit code unavailable");
                    Ok(ChildResult::ExitCodeUnavailable)
                }
            },
            Err(err) if err.kind() == io::ErrorKind::TimedOut => {
                tracing::warn!(%err, "wait timed out");
                Ok(ChildResult::WaitTimedOut)
            }
            Err(err) => {
                tracing::warn!(%err, "wait failed");
                Ok(ChildResult::ExitCodeUnavailable)
            }
        }
    }
}
