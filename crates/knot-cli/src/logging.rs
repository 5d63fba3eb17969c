use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Maps the `-v` count and `--quiet` flag to a log level.
///
/// Quiet mode still lets errors through: a smoothing run that fails must
/// never fail silently.
fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(&path).map_err(CliError::Io)?;

        // The pipeline is single-threaded, so the file layer keeps event
        // targets for filtering but skips thread ids.
        let file_layer = fmt::layer().with_writer(file).with_ansi(false);

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::{debug, info};

    #[test]
    fn verbosity_count_raises_the_level() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(5, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_keeps_errors_visible_and_overrides_verbosity() {
        assert_eq!(level_filter(0, true), LevelFilter::ERROR);
        assert_eq!(level_filter(3, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn stderr_only_setup_succeeds() {
        setup_logging(1, false, None).expect("stderr-only logging setup must not fail");
    }

    #[test]
    fn file_layer_records_smoothing_events_without_ansi() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("knot.log");

        let file = File::create(&log_path).unwrap();
        let subscriber =
            tracing_subscriber::registry().with(fmt::layer().with_writer(file).with_ansi(false));
        tracing::subscriber::with_default(subscriber, || {
            info!(passes = 50, "Starting backbone smoothing.");
            debug!(index = 12, "Vertex pinned by the crossing guard.");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Starting backbone smoothing."));
        assert!(content.contains("passes=50"));
        assert!(content.contains("Vertex pinned by the crossing guard."));
        assert!(
            !content.contains('\u{1b}'),
            "file output must not contain ANSI escapes"
        );
    }

    #[test]
    fn unwritable_log_file_path_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing_parent = dir.path().join("no-such-dir").join("knot.log");

        let result = setup_logging(0, false, Some(missing_parent));

        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
