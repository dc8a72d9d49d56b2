//! Locations under ~/.markov_dice/ and a JSON writer for reports.

use crate::constants::APP_DIR_NAME;
use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the ~/.markov_dice/ directory path, creating it if needed.
pub fn app_dir() -> Result<PathBuf, AppError> {
    let home_dir = dirs::home_dir().ok_or(AppError::NoHomeDir)?;
    let dir = home_dir.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.markov_dice/.
pub fn app_path(filename: &str) -> Result<PathBuf, AppError> {
    Ok(app_dir()?.join(filename))
}

/// Write a value as pretty-printed JSON.
pub fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
