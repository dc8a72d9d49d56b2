//! Monte Carlo simulator for the mod-7 dice chain.
//!
//! Runs many independent seeded chains to check how quickly the observed
//! state distribution settles on the uniform 1/7:
//! - per-state visit percentages averaged across runs
//! - mean absolute deviation at roll-count checkpoints
//! - how many runs land within tolerance

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{Checkpoint, RunStats, SimReport};
pub use runner::{checkpoints, run_simulation, simulate_single_run};
