mod report;

use anyhow::{anyhow, bail, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use report::{DeriveReport, LocateReport, PlanReport, SplitReport, VariantReport};
use serde::Serialize;
use shim::cmdline::split_command_line;
use shim::locate::{FixedPath, PatternSearch, Strategy, UpwardProbe};
use shim::paths::DerivedPaths;
use shim::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "shim")]
#[command(about = "Inspect and exercise launcher stub resolution")]
struct Cmd {
    /// Log every probe
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Split a raw command line into program token and forwarded tail
    Split { raw: String },
    /// Derive base directory and program name from a launcher path
    Derive { path: String },
    /// Run a single locator strategy against a base directory
    Locate(LocateArgs),
    /// Resolve a variant without spawning and print the plan
    Plan(LaunchArgs),
    /// Resolve a variant, spawn the runtime, and exit with the launcher's code
    Run(LaunchArgs),
    /// List the built-in launcher variants
    Variants,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("strategy")
        .required(true)
        .args(["variant", "fixed", "upward", "pattern"])
))]
struct LocateArgs {
    /// Launcher directory to search from
    #[arg(long)]
    base: String,
    /// Program name (without `.exe`)
    #[arg(long, default_value = "")]
    name: String,
    /// Use the strategy of a built-in variant
    #[arg(long)]
    variant: Option<String>,
    /// Fixed suffix under the base, `/`-separated
    #[arg(long)]
    fixed: Option<String>,
    /// Suffix probed in the base and every ancestor
    #[arg(long)]
    upward: Option<String>,
    /// Name prefix of the versioned sibling directory, e.g. `python-`
    #[arg(long)]
    pattern: Option<String>,
    /// Runtime inside the matched sibling (with --pattern)
    #[arg(long, default_value = "python.exe")]
    runtime: String,
    /// Character between the version digits (with --pattern)
    #[arg(long, default_value_t = '.')]
    version_separator: char,
}

#[derive(Args)]
struct LaunchArgs {
    #[arg(long)]
    variant: String,
    /// Path the launcher would have been started from
    #[arg(long)]
    launcher: String,
    /// Raw command line, program token included
    #[arg(long)]
    cmdline: String,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let code = match cmd.action {
        Action::Split { raw } => split(&raw),
        Action::Derive { path } => derive(&path),
        Action::Locate(args) => locate(&args),
        Action::Plan(args) => plan_only(&args),
        Action::Run(args) => run(&args),
        Action::Variants => variants(),
    }?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn find_variant(name: &str) -> Result<&'static Variant> {
    Variant::by_name(name).ok_or_else(|| {
        let known: Vec<&str> = Variant::ALL.iter().map(|v| v.name).collect();
        anyhow!("unknown variant `{name}` (known: {})", known.join(", "))
    })
}

fn components(suffix: &str) -> Vec<&str> {
    suffix
        .split(['/', '\\'])
        .filter(|c| !c.is_empty())
        .collect()
}

fn split(raw: &str) -> Result<i32> {
    let split = split_command_line(raw);
    print_json(&SplitReport::from(&split))?;
    Ok(0)
}

fn derive(path: &str) -> Result<i32> {
    let derived = DerivedPaths::from_path(path);
    print_json(&DeriveReport::from(&derived))?;
    Ok(0)
}

fn locate(args: &LocateArgs) -> Result<i32> {
    let fixed = args.fixed.as_deref().map(components);
    let upward = args.upward.as_deref().map(components);
    let runtime = components(&args.runtime);
    let strategy = match (&args.variant, &fixed, &upward, &args.pattern) {
        (Some(name), ..) => find_variant(name)?.strategy,
        (_, Some(suffix), ..) => Strategy::Fixed(FixedPath::new(suffix)),
        (_, _, Some(suffix), _) => Strategy::Upward(UpwardProbe::new(suffix)),
        (_, _, _, Some(prefix)) => {
            Strategy::Pattern(PatternSearch::new(prefix, args.version_separator, &runtime))
        }
        _ => bail!("one of --variant, --fixed, --upward or --pattern is required"),
    };
    tracing::info!(strategy = strategy.name(), base = args.base, "locate");
    let report = LocateReport::run(&strategy, &args.base, &args.name);
    print_json(&report)?;
    Ok(report.exit_code())
}

fn plan_only(args: &LaunchArgs) -> Result<i32> {
    let variant = find_variant(&args.variant)?;
    let invocation = Invocation::new(args.cmdline.as_str(), args.launcher.as_str());
    match plan(variant, &invocation) {
        Ok(plan) => {
            print_json(&PlanReport::new(variant, &plan))?;
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}: {err}", variant.name);
            Ok(err.exit_code())
        }
    }
}

fn run(args: &LaunchArgs) -> Result<i32> {
    let variant = find_variant(&args.variant)?;
    let invocation = Invocation::new(args.cmdline.as_str(), args.launcher.as_str());
    let result = execute(variant, &invocation, &SystemSpawner::new(variant.console));
    if let Err(err) = &result {
        eprintln!("{}: {err}", variant.name);
    }
    let code = exit_code(&result);
    tracing::info!(code, "child finished");
    Ok(code)
}

fn variants() -> Result<i32> {
    let reports: Vec<VariantReport> = Variant::ALL.iter().map(VariantReport::from).collect();
    print_json(&reports)?;
    Ok(0)
}
