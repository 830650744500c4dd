//! Launch orchestration: capture, derive, locate, compose, spawn, exit.
//!
//! Strictly sequential and single-threaded; the only blocking point is the
//! wait on the child.

use crate::cmdline::{RawCommandLine, SplitCommandLine};
use crate::compose::{self, ComposedCommandLine};
use crate::error::LaunchError;
use crate::locate::Locate;
use crate::paths::{self, DerivedPaths};
use crate::spawn::{ChildResult, ConsoleMode, Spawner};
use crate::variant::{Anchor, Variant};
use std::path::Path;

/// What the OS told us about this process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub raw: RawCommandLine,
    pub launcher_path: String,
}

impl Invocation {
    pub fn new(raw: impl Into<String>, launcher_path: impl Into<String>) -> Self {
        Self {
            raw: RawCommandLine::new(raw),
            launcher_path: launcher_path.into(),
        }
    }

    pub fn capture() -> Result<Self, LaunchError> {
        Ok(Self {
            raw: RawCommandLine::capture()?,
            launcher_path: paths::launcher_path()?,
        })
    }
}

/// Everything decided before the child is spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchPlan {
    pub split: SplitCommandLine,
    pub paths: DerivedPaths,
    pub runtime: String,
    pub companion: Option<String>,
    pub preamble: Option<String>,
    pub command_line: ComposedCommandLine,
    pub console: ConsoleMode,
}

pub fn plan(variant: &Variant, invocation: &Invocation) -> Result<LaunchPlan, LaunchError> {
    let split = invocation.raw.split();
    let anchor = match variant.anchor {
        Anchor::LauncherPath => invocation.launcher_path.as_str(),
        Anchor::ProgramToken => split.program(),
    };
    let derived = DerivedPaths::from_path(anchor);

    let runtime = variant
        .strategy
        .locate(&derived.base_directory, &derived.program_name)
        .map_err(|not_found| LaunchError::RuntimeNotFound {
            searched: not_found.searched,
        })?;

    let companion = match variant.companion {
        Some(layout) => {
            let path = layout.path(&derived.base_directory, &derived.program_name);
            if !Path::new(&path).exists() {
                return Err(LaunchError::CompanionNotFound { path });
            }
            Some(path)
        }
        None => None,
    };

    let preamble = variant
        .preamble
        .map(|p| (p.shell, p.script_path(&derived.base_directory)));
    let command_line = match &preamble {
        Some((shell, script)) => compose::compose_with_preamble(
            shell,
            script,
            &runtime,
            companion.as_deref(),
            &split.tail,
        ),
        None => compose::compose(&runtime, companion.as_deref(), &split.tail),
    };
    tracing::info!(
        variant = variant.name,
        runtime,
        command_line = command_line.as_str(),
        "launch plan"
    );

    Ok(LaunchPlan {
        split,
        paths: derived,
        runtime,
        companion,
        preamble: preamble.map(|(_, script)| script),
        command_line,
        console: variant.console,
    })
}

pub fn execute<S: Spawner>(
    variant: &Variant,
    invocation: &Invocation,
    spawner: &S,
) -> Result<ChildResult, LaunchError> {
    let plan = plan(variant, invocation)?;
    spawner.spawn_and_wait(&plan.command_line)
}

/// The launcher's own exit code for a finished (or failed) launch.
pub fn exit_code(result: &Result<ChildResult, LaunchError>) -> i32 {
    match result {
        Ok(child) => child.exit_code(),
        Err(err) => err.exit_code(),
    }
}
