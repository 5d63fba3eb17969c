use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "knotpp CLI - Smooths protein backbone traces with a topology-preserving relaxation, so that deeply buried knots become detectable.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Relax a backbone trace while preserving its knot type.
    Smooth(SmoothArgs),
}

/// Arguments for the `smooth` subcommand.
#[derive(Args, Debug)]
pub struct SmoothArgs {
    /// Path to the input trace file (one "x y z" coordinate triple per line).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output trace file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Number of smoothing passes to run.
    /// A knot typically becomes detectable after about 50 passes.
    #[arg(short, long, default_value_t = 1, value_name = "INT")]
    pub passes: usize,

    /// Additionally write the trace after every pass to "<output>.pass<N>".
    #[arg(long)]
    pub write_each_pass: bool,
}
