use crate::cli::SmoothArgs;
use crate::error::Result;
use crate::{io, ui};
use knotpp::engine::config::SmoothConfig;
use knotpp::engine::progress::ProgressReporter;
use knotpp::engine::smoothing::SmoothStats;
use knotpp::workflows::smooth as smooth_workflow;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: SmoothArgs) -> Result<()> {
    let mut trace = io::read_trace(&args.input)?;
    info!(
        vertices = trace.len(),
        input = %args.input.display(),
        "Loaded backbone trace."
    );

    let bar = ui::smoothing_bar(args.passes as u64);
    let reporter = ProgressReporter::with_callback(ui::progress_callback(bar.clone()));

    let mut stats = SmoothStats::default();
    if args.write_each_pass {
        // One pass per workflow call; identical output to a single
        // multi-pass run because passes are strictly sequential.
        let config = SmoothConfig::new(1);
        for pass in 1..=args.passes {
            let outcome = smooth_workflow::run(trace, &config, &reporter)?;
            trace = outcome.trace;
            stats.passes += outcome.stats.passes;
            stats.moved += outcome.stats.moved;
            stats.rejected += outcome.stats.rejected;
            io::write_trace(&snapshot_path(&args.output, pass), &trace)?;
        }
    } else {
        let config = SmoothConfig::new(args.passes);
        let outcome = smooth_workflow::run(trace, &config, &reporter)?;
        trace = outcome.trace;
        stats = outcome.stats;
    }
    bar.finish_and_clear();

    io::write_trace(&args.output, &trace)?;
    info!(
        output = %args.output.display(),
        passes = stats.passes,
        moved = stats.moved,
        rejected = stats.rejected,
        "Wrote smoothed trace."
    );
    println!(
        "Smoothed {} vertices over {} pass(es): {} moves committed, {} pinned by the crossing guard.",
        trace.len(),
        stats.passes,
        stats.moved,
        stats.rejected
    );

    Ok(())
}

fn snapshot_path(output: &Path, pass: usize) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(format!(".pass{}", pass));
    PathBuf::from(name)
}
