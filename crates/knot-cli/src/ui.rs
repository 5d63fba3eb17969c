use indicatif::{ProgressBar, ProgressStyle};
use knotpp::engine::progress::{Progress, ProgressCallback};

/// Creates the progress bar for a smoothing run over `passes` passes.
pub fn smoothing_bar(passes: u64) -> ProgressBar {
    let bar = ProgressBar::new(passes);
    bar.set_style(bar_style());
    bar.set_message("Smoothing passes");
    bar
}

/// Bridges core progress events onto an indicatif bar.
///
/// The bar's length is owned by the caller (so that pass-at-a-time driving
/// still advances one shared bar); the callback only advances it and relays
/// messages.
pub fn progress_callback(bar: ProgressBar) -> ProgressCallback<'static> {
    Box::new(move |event: Progress| match event {
        Progress::PassFinish { .. } => bar.inc(1),
        Progress::Message(msg) => bar.println(format!("  {}", msg)),
        _ => {}
    })
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len}")
        .expect("Invalid template")
        .progress_chars("━╸ ")
}
