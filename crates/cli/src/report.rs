use serde::Serialize;
use shim::cmdline::SplitCommandLine;
use shim::locate::{Locate, Strategy};
use shim::paths::DerivedPaths;
use shim::spawn::ConsoleMode;
use shim::variant::{Anchor, Variant};
use shim::LaunchPlan;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SplitReport<'a> {
    pub program_token: &'a str,
    pub program: &'a str,
    pub separator: Option<char>,
    pub tail: &'a str,
}

impl<'a> From<&'a SplitCommandLine> for SplitReport<'a> {
    fn from(split: &'a SplitCommandLine) -> Self {
        Self {
            program_token: &split.program_token,
            program: split.program(),
            separator: split.separator,
            tail: &split.tail,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeriveReport<'a> {
    pub base_directory: &'a str,
    pub program_name: &'a str,
}

impl<'a> From<&'a DerivedPaths> for DeriveReport<'a> {
    fn from(paths: &'a DerivedPaths) -> Self {
        Self {
            base_directory: &paths.base_directory,
            program_name: &paths.program_name,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocateReport {
    Resolved(String),
    NotFound(Vec<String>),
}

impl LocateReport {
    pub fn run(strategy: &Strategy<'_>, base_directory: &str, program_name: &str) -> Self {
        match strategy.locate(base_directory, program_name) {
            Ok(path) => Self::Resolved(path),
            Err(not_found) => Self::NotFound(not_found.searched),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Resolved(_) => 0,
            Self::NotFound(_) => shim::error::EXIT_NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub variant: &'a str,
    pub split: SplitReport<'a>,
    pub paths: DeriveReport<'a>,
    pub runtime: &'a str,
    pub companion: Option<&'a str>,
    pub preamble: Option<&'a str>,
    pub command_line: &'a str,
    pub console: &'static str,
}

impl<'a> PlanReport<'a> {
    pub fn new(variant: &'a Variant, plan: &'a LaunchPlan) -> Self {
        Self {
            variant: variant.name,
            split: (&plan.split).into(),
            paths: (&plan.paths).into(),
            runtime: &plan.runtime,
            companion: plan.companion.as_deref(),
            preamble: plan.preamble.as_deref(),
            command_line: plan.command_line.as_str(),
            console: console_name(plan.console),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VariantReport {
    pub name: &'static str,
    pub anchor: &'static str,
    pub strategy: &'static str,
    pub layout: String,
    pub companion: Option<String>,
    pub preamble: Option<String>,
    pub console: &'static str,
}

impl From<&Variant> for VariantReport {
    fn from(v: &Variant) -> Self {
        Self {
            name: v.name,
            anchor: match v.anchor {
                Anchor::LauncherPath => "launcher_path",
                Anchor::ProgramToken => "program_token",
            },
            strategy: v.strategy.name(),
            layout: v.strategy.describe(),
            companion: v
                .companion
                .map(|c| format!("<base>/{}/<name>.{}", c.dir.join("/"), c.extension)),
            preamble: v
                .preamble
                .map(|p| format!("{} /c <base>/{}", p.shell, p.script.join("/"))),
            console: console_name(v.console),
        }
    }
}

fn console_name(mode: ConsoleMode) -> &'static str {
    match mode {
        ConsoleMode::Inherit => "inherit",
        ConsoleMode::Hidden => "hidden",
    }
}
