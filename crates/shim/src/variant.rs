//! Launcher variants: compile-time configuration of each stub.
//!
//! Filesystem layouts (`<base>` is the launcher's directory, `<name>` its
//! program name without `.exe`):
//!
//! | variant                      | runtime                                   | companion             |
//! |------------------------------|-------------------------------------------|-----------------------|
//! | `cli-exe-wrapper`            | first `bin/python/python.exe` upwards     | `<base>/py/<name>.py` |
//! | `python-venv-exe-wrapper`    | `<base>/Bin/python.exe`                   |                       |
//! | `pythonw-venv-exe-wrapper`   | `<base>/Bin/python.exe`, no console       |                       |
//! | `python-scripts-exe-wrapper` | `<base>/../python-<d>.<d>*/python.exe`    |                       |
//! | `launcher-julia`             | `<base>/julia/bin/julia.exe` via `cmd.exe`|                       |

use crate::locate::{FixedPath, PatternSearch, Strategy, UpwardProbe};
use crate::paths;
use crate::spawn::ConsoleMode;

const PYTHON_IN_TREE: &[&str] = &["bin", "python", "python.exe"];
const VENV_PYTHON: &[&str] = &["Bin", "python.exe"];
const PYTHON_DIR_PREFIX: &str = "python-";
const PYTHON_EXE: &[&str] = &["python.exe"];
const JULIA_EXE: &[&str] = &["julia", "bin", "julia.exe"];
const JULIA_ACTIVATE: &[&str] = &["activate-julia-environment.cmd"];
const SHELL: &str = "cmd.exe";

/// Where base directory and program name are derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// The executable's own path as reported by the OS.
    LauncherPath,
    /// The unquoted program token of the raw command line.
    ProgramToken,
}

/// Script or archive passed to the runtime as its first argument:
/// `<base>/<dir...>/<name>.<extension>`. Must exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Companion<'a> {
    pub dir: &'a [&'a str],
    pub extension: &'a str,
}

impl Companion<'_> {
    pub fn path(&self, base_directory: &str, program_name: &str) -> String {
        let file = format!("{program_name}.{}", self.extension);
        paths::join(&paths::join(base_directory, self.dir), &[file.as_str()])
    }
}

/// Script run by `shell /c` before the runtime, in the same shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preamble<'a> {
    pub shell: &'a str,
    pub script: &'a [&'a str],
}

impl Preamble<'_> {
    pub fn script_path(&self, base_directory: &str) -> String {
        paths::join(base_directory, self.script)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub anchor: Anchor,
    pub strategy: Strategy<'static>,
    pub companion: Option<Companion<'static>>,
    pub preamble: Option<Preamble<'static>>,
    pub console: ConsoleMode,
}

impl Variant {
    /// Embedded interpreter somewhere above the launcher, script in `py/`.
    pub const CLI_EXE_WRAPPER: Variant = Variant {
        name: "cli-exe-wrapper",
        anchor: Anchor::LauncherPath,
        strategy: Strategy::Upward(UpwardProbe::new(PYTHON_IN_TREE)),
        companion: Some(Companion {
            dir: &["py"],
            extension: "py",
        }),
        preamble: None,
        console: ConsoleMode::Inherit,
    };

    pub const PYTHON_VENV: Variant = Variant {
        name: "python-venv-exe-wrapper",
        anchor: Anchor::LauncherPath,
        strategy: Strategy::Fixed(FixedPath::new(VENV_PYTHON)),
        companion: None,
        preamble: None,
        console: ConsoleMode::Inherit,
    };

    pub const PYTHONW_VENV: Variant = Variant {
        name: "pythonw-venv-exe-wrapper",
        console: ConsoleMode::Hidden,
        ..Variant::PYTHON_VENV
    };

    pub const PYTHON_SCRIPTS: Variant = Variant {
        name: "python-scripts-exe-wrapper",
        anchor: Anchor::LauncherPath,
        strategy: Strategy::Pattern(PatternSearch::new(PYTHON_DIR_PREFIX, '.', PYTHON_EXE)),
        companion: None,
        preamble: None,
        console: ConsoleMode::Inherit,
    };

    pub const JULIA: Variant = Variant {
        name: "launcher-julia",
        anchor: Anchor::ProgramToken,
        strategy: Strategy::Fixed(FixedPath::new(JULIA_EXE)),
        companion: None,
        preamble: Some(Preamble {
            shell: SHELL,
            script: JULIA_ACTIVATE,
        }),
        console: ConsoleMode::Inherit,
    };

    pub const ALL: &'static [Variant] = &[
        Variant::CLI_EXE_WRAPPER,
        Variant::PYTHON_VENV,
        Variant::PYTHONW_VENV,
        Variant::PYTHON_SCRIPTS,
        Variant::JULIA,
    ];

    pub fn by_name(name: &str) -> Option<&'static Variant> {
        Self::ALL.iter().find(|v| v.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR as SEP;

    #[test]
    fn every_variant_is_found_by_name() {
        for v in Variant::ALL {
            assert_eq!(Variant::by_name(v.name), Some(v));
        }
        assert!(Variant::by_name("no-such-variant").is_none());
    }

    #[test]
    fn windowed_venv_differs_only_in_console() {
        let w = Variant::PYTHONW_VENV;
        assert_eq!(w.console, ConsoleMode::Hidden);
        assert_eq!(w.strategy, Variant::PYTHON_VENV.strategy);
        assert_eq!(Variant::PYTHON_VENV.console, ConsoleMode::Inherit);
    }

    #[test]
    fn companion_path_uses_program_name() {
        let c = Variant::CLI_EXE_WRAPPER.companion.unwrap();
        assert_eq!(c.path("base", "tool"), format!("base{SEP}py{SEP}tool.py"));
    }

    #[test]
    fn julia_preamble_sits_next_to_launcher() {
        let p = Variant::JULIA.preamble.unwrap();
        assert_eq!(p.shell, "cmd.exe");
        assert_eq!(
            p.script_path("base"),
            format!("base{SEP}activate-julia-environment.cmd")
        );
        assert_eq!(Variant::JULIA.anchor, Anchor::ProgramToken);
    }
}
