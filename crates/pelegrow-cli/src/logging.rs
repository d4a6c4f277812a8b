use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{Layer, Registry, filter::LevelFilter, fmt, prelude::*};

/// `-q` wins over any number of `-v`; with neither, only warnings and errors are shown.
fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn file_layer(file: File) -> impl Layer<Registry> + Send + Sync {
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(LevelFilter::TRACE)
}

/// Installs the global subscriber: compact stderr output filtered by the CLI flags, plus
/// a full trace of the run in `log_file` when one is given.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => Some(file_layer(File::create(&path)?)),
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(level_filter(verbosity, quiet));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}
