//! Error type for the binaries and their file/terminal plumbing.
//!
//! The chain itself never fails; everything here comes from the outer
//! surfaces.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or filesystem I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Interval not among the presets (100, 300, 500, 1000)
    #[error("Invalid speed: {0}ms (expected 100, 300, 500 or 1000)")]
    InvalidSpeed(u64),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    pub fn logging(msg: impl std::fmt::Display) -> Self {
        Self::Logging(msg.to_string())
    }
}
