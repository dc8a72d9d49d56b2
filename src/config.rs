//! Terminal app configuration.

use crate::constants::HISTORY_WINDOW;
use crate::driver::Speed;

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Initial roll interval
    pub speed: Speed,

    /// Number of recent steps drawn in the history chart
    pub history_window: usize,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// tracing filter for the log file
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            speed: Speed::default(),
            history_window: HISTORY_WINDOW,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}
