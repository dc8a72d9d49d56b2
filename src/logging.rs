//! tracing subscriber setup for both binaries.
//!
//! The TUI owns the terminal, so it logs to ~/.markov_dice/markov_dice.log.
//! The simulator logs to stderr. `RUST_LOG` overrides the given level.

use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use crate::utils::paths::app_path;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn build_filter(level: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(AppError::logging)
}

/// Log to the app log file. Returns the file path.
pub fn init_file_logging(level: &str) -> Result<PathBuf, AppError> {
    let path = app_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(AppError::logging)?;

    Ok(path)
}

/// Log to stderr, at debug level when `verbose`.
pub fn init_stderr_logging(verbose: bool) -> Result<(), AppError> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(AppError::logging)
}
