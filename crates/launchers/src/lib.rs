//! Shared entry point of the launcher stubs.
//!
//! Each binary under `src/bin` picks one `Variant` and exits with `run`'s code.
//! Stdout belongs to the child, so logs go to stderr and only errors are shown.

use shim::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

pub fn init_logging() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .init();
}

/// Capture the invocation, launch the runtime, and return the exit code.
pub fn run(variant: &Variant) -> i32 {
    init_logging();
    let result = Invocation::capture()
        .and_then(|inv| execute(variant, &inv, &SystemSpawner::new(variant.console)));
    if let Err(err) = &result {
        eprintln!("{}: {err}", variant.name);
    }
    exit_code(&result)
}
