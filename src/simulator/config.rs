//! Simulation configuration.

use crate::constants::{DEFAULT_SIM_ROLLS, DEFAULT_SIM_RUNS, DEFAULT_TOLERANCE_PCT};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent chains to run
    pub num_runs: u32,

    /// Rolls per chain
    pub rolls_per_run: u64,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// A run converges when every state is within this many percentage
    /// points of 100/7
    pub tolerance_pct: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: DEFAULT_SIM_RUNS,
            rolls_per_run: DEFAULT_SIM_ROLLS,
            seed: None,
            tolerance_pct: DEFAULT_TOLERANCE_PCT,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick sanity check: a handful of short chains
    pub fn quick() -> Self {
        Self {
            num_runs: 5,
            rolls_per_run: 10_000,
            ..Default::default()
        }
    }

    /// Long chains with a tight tolerance to watch the deviation shrink
    pub fn convergence_study() -> Self {
        Self {
            num_runs: 50,
            rolls_per_run: 1_000_000,
            tolerance_pct: 0.5,
            ..Default::default()
        }
    }
}
