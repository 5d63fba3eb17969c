use crate::core::models::trace::BackboneTrace;
use crate::engine::config::SmoothConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::smoothing::{self, SmoothStats};
use tracing::{info, instrument};

/// The smoothed trace together with the run's accept/reject tallies.
#[derive(Debug)]
pub struct SmoothOutcome {
    pub trace: BackboneTrace,
    pub stats: SmoothStats,
}

/// Smooths a backbone trace for the configured number of passes.
///
/// The trace is taken by move and handed back by move: the workflow is the
/// trace's sole owner for the duration of the call, and no other collaborator
/// can observe it mid-pass. The run is synchronous and CPU-bound; it either
/// completes deterministically or does not run at all.
#[instrument(skip_all, name = "smooth_workflow", fields(passes = config.passes))]
pub fn run(
    mut trace: BackboneTrace,
    config: &SmoothConfig,
    reporter: &ProgressReporter,
) -> Result<SmoothOutcome, EngineError> {
    info!(
        vertices = trace.len(),
        passes = config.passes,
        "Starting backbone smoothing."
    );

    let stats = smoothing::smooth(&mut trace, config.passes, reporter);

    info!(
        moved = stats.moved,
        rejected = stats.rejected,
        "Smoothing complete."
    );
    Ok(SmoothOutcome { trace, stats })
}

/// Reserved entry point for convergence-driven smoothing.
///
/// The variant has no specified behavior yet, so it accepts no trace at all:
/// no mutation can ever be observed through it, and it always fails with
/// [`EngineError::NotImplemented`].
pub fn run_auto() -> Result<SmoothOutcome, EngineError> {
    Err(EngineError::NotImplemented {
        feature: "convergence-driven smoothing",
    })
}
