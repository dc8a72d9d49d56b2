//! Main simulation runner.
//!
//! Each run is an independent engine driven by its own seeded RNG. Statistics
//! are read from the engine after the run and at the convergence checkpoints.

use super::config::SimConfig;
use super::report::{Checkpoint, RunStats, SimReport};
use crate::chain::SimulationEngine;
use crate::constants::THEORETICAL_PERCENT;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    if config.verbosity >= 1 {
        info!(
            runs = config.num_runs,
            rolls = config.rolls_per_run,
            seed = ?config.seed,
            "starting simulation"
        );
    }

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, seed, &mut rng);

        if config.verbosity >= 2 {
            debug!(
                run = run_idx + 1,
                of = config.num_runs,
                mad = run_stats.mean_abs_deviation,
                max_dev = run_stats.max_abs_deviation,
                converged = run_stats.converged,
                "run finished"
            );
        }

        all_runs.push(run_stats);
    }

    let report = SimReport::from_runs(all_runs, config);

    if config.verbosity >= 1 {
        info!(
            converged = report.runs_converged,
            runs = report.num_runs,
            avg_mad = report.avg_mean_abs_deviation,
            "simulation finished"
        );
    }

    report
}

/// Roll counts at which the deviation is sampled: powers of ten up to
/// `rolls`, plus `rolls` itself.
pub fn checkpoints(rolls: u64) -> Vec<u64> {
    let mut points = Vec::new();
    let mut n = 10u64;
    while n <= rolls {
        points.push(n);
        match n.checked_mul(10) {
            Some(next) => n = next,
            None => break,
        }
    }
    if rolls > 0 && points.last() != Some(&rolls) {
        points.push(rolls);
    }
    points
}

/// Drive one fresh engine for `config.rolls_per_run` rolls.
pub fn simulate_single_run<R: Rng + ?Sized>(
    config: &SimConfig,
    seed: Option<u64>,
    rng: &mut R,
) -> RunStats {
    let mut engine = SimulationEngine::new();
    let mut convergence = Vec::new();
    let mut next_checkpoint = checkpoints(config.rolls_per_run).into_iter().peekable();

    for _ in 0..config.rolls_per_run {
        engine.advance(rng);

        if next_checkpoint.peek() == Some(&engine.roll_count()) {
            next_checkpoint.next();
            convergence.push(Checkpoint {
                rolls: engine.roll_count(),
                mean_abs_deviation: engine.mean_absolute_deviation(),
            });
        }
    }

    let observed = engine.observed_distribution();
    let max_abs_deviation = engine.max_absolute_deviation();

    RunStats {
        seed,
        rolls: engine.roll_count(),
        final_residue: engine.residue(),
        cumulative_sum: engine.cumulative_sum(),
        frequency: *engine.frequency(),
        observed,
        mean_abs_deviation: engine.mean_absolute_deviation(),
        max_abs_deviation,
        converged: engine.has_rolled() && within_tolerance(&observed, config.tolerance_pct),
        convergence,
    }
}

fn within_tolerance(observed: &[f64], tolerance_pct: f64) -> bool {
    observed
        .iter()
        .all(|pct| (pct - THEORETICAL_PERCENT).abs() <= tolerance_pct)
}
