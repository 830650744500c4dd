//! Core of the launcher stubs.
//!
//! A launcher re-derives the command line it was started with, finds a runtime
//! (interpreter) relative to its own location, and re-invokes that runtime with
//! the original arguments. Pipeline, strictly sequential:
//!
//! 1. `cmdline`  split the raw command line into program token and tail
//! 2. `paths`    derive base directory and program name from the launcher path
//! 3. `locate`   find the runtime (fixed path, pattern search, upward probe)
//! 4. `compose`  build the child command line
//! 5. `spawn`    spawn, block, and map the child outcome to an exit code
//!
//! `variant` holds the catalogue of launcher configurations and `launch` wires
//! the steps together.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - The launcher binaries and the diagnostic CLI are the only callers.

pub mod cmdline;
pub mod compose;
pub mod error;
pub mod launch;
pub mod locate;
pub mod paths;
pub mod spawn;
pub mod variant;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cmdline::{RawCommandLine, SplitCommandLine};
pub use compose::ComposedCommandLine;
pub use error::LaunchError;
pub use launch::{Invocation, LaunchPlan};
pub use locate::{Locate, NotFound, Strategy};
pub use paths::DerivedPaths;
pub use spawn::{ChildResult, ConsoleMode, Spawner, SystemSpawner};
pub use variant::Variant;

/// Common exports for the binaries.
pub mod prelude {
    pub use crate::launch::{execute, exit_code, plan, Invocation, LaunchPlan};
    pub use crate::spawn::{ChildResult, Spawner, SystemSpawner};
    pub use crate::variant::Variant;
    pub use crate::LaunchError;
}
