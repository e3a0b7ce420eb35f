use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::{
        self,
        format::{DefaultFields, Format},
    },
    prelude::*,
};

const OWN_TARGETS: [&str; 2] = ["pluq", "pluqin"];

pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
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

/// Our crates log at `level`; dependencies never go past WARN.
fn target_filter(level: LevelFilter) -> Targets {
    OWN_TARGETS
        .into_iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(target, level)
        })
        .with_default(level.min(LevelFilter::WARN))
}

/// Plain-text records with thread ids and targets, for `--log-file`.
fn file_layer<S>(file: File) -> fmt::Layer<S, DefaultFields, Format, File> {
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let filter = target_filter(level_for(verbosity, quiet));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let file = log_file.map(File::create).transpose()?;
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file.map(file_layer))
        .try_init();

    installed.map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{Level, debug, error, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    #[serial]
    fn initialization_and_macros_work() {
        ensure_global_logger_is_set();

        error!("This is an error");
        warn!("This is a warning");
        info!("This is info");
        debug!("This is debug");
        trace!("This is trace");
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(7, false), LevelFilter::TRACE);
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn dependencies_are_capped_at_warn() {
        let filter = target_filter(LevelFilter::DEBUG);
        assert!(filter.would_enable("pluq::engine::assign", &Level::DEBUG));
        assert!(filter.would_enable("pluqin::commands", &Level::DEBUG));
        assert!(!filter.would_enable("rayon_core", &Level::INFO));
        assert!(filter.would_enable("rayon_core", &Level::WARN));

        let quiet = target_filter(LevelFilter::ERROR);
        assert!(!quiet.would_enable("pluq", &Level::WARN));
        assert!(!quiet.would_enable("toml", &Level::WARN));
    }

    #[test]
    #[serial]
    fn file_layer_writes_plain_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("pluqin.log");

        let file = File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry().with(file_layer(file));

        tracing::subscriber::with_default(subscriber, || {
            debug!(residues = 3, "Message for file-only test.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Message for file-only test."));
        assert!(content.contains("residues=3"));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
