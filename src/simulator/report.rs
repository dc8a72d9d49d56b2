//! Simulation report generation.

use super::config::SimConfig;
use crate::chain::theoretical_distribution;
use crate::constants::{NUM_STATES, THEORETICAL_PERCENT};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Mean absolute deviation sampled after `rolls` rolls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub rolls: u64,
    pub mean_abs_deviation: f64,
}

/// Outcome of one simulated chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub rolls: u64,
    pub final_residue: u8,
    pub cumulative_sum: u64,
    pub frequency: [u64; NUM_STATES],
    pub observed: [f64; NUM_STATES],
    pub mean_abs_deviation: f64,
    pub max_abs_deviation: f64,
    pub converged: bool,
    pub convergence: Vec<Checkpoint>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub rolls_per_run: u64,
    pub tolerance_pct: f64,
    pub runs_converged: u32,

    // Aggregated stats
    pub avg_observed: [f64; NUM_STATES],
    pub theoretical: [f64; NUM_STATES],
    pub avg_mean_abs_deviation: f64,
    pub worst_mean_abs_deviation: f64,
    pub worst_max_abs_deviation: f64,

    /// Deviation at each checkpoint, averaged across runs
    pub avg_convergence: Vec<Checkpoint>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_converged = runs.iter().filter(|r| r.converged).count() as u32;

        let mut avg_observed = [0.0; NUM_STATES];
        for run in &runs {
            for (avg, pct) in avg_observed.iter_mut().zip(run.observed.iter()) {
                *avg += pct / divisor;
            }
        }

        let avg_mean_abs_deviation =
            runs.iter().map(|r| r.mean_abs_deviation).sum::<f64>() / divisor;
        let worst_mean_abs_deviation = runs
            .iter()
            .map(|r| r.mean_abs_deviation)
            .fold(0.0, f64::max);
        let worst_max_abs_deviation = runs
            .iter()
            .map(|r| r.max_abs_deviation)
            .fold(0.0, f64::max);

        // Every run shares the same checkpoints, so average position-wise
        let avg_convergence = runs
            .first()
            .map(|first| {
                first
                    .convergence
                    .iter()
                    .enumerate()
                    .map(|(i, cp)| Checkpoint {
                        rolls: cp.rolls,
                        mean_abs_deviation: runs
                            .iter()
                            .filter_map(|r| r.convergence.get(i))
                            .map(|c| c.mean_abs_deviation)
                            .sum::<f64>()
                            / divisor,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            num_runs,
            rolls_per_run: config.rolls_per_run,
            tolerance_pct: config.tolerance_pct,
            runs_converged,
            avg_observed,
            theoretical: theoretical_distribution(),
            avg_mean_abs_deviation,
            worst_mean_abs_deviation,
            worst_max_abs_deviation,
            avg_convergence,
            run_stats: runs,
        }
    }

    /// Share of runs that converged, in percent.
    pub fn convergence_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.runs_converged as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                MOD-7 DICE CHAIN SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} rolls, {} converged (±{:.2}pp)\n\n",
            self.num_runs, self.rolls_per_run, self.runs_converged, self.tolerance_pct
        ));

        report.push_str("── STATE DISTRIBUTION ───────────────────────────────────────────\n");
        report.push_str("  State   Observed   Theoretical   Diff\n");
        report.push_str("  ─────   ────────   ───────────   ──────\n");
        for (state, (&obs, &theo)) in self
            .avg_observed
            .iter()
            .zip(self.theoretical.iter())
            .enumerate()
        {
            let bar: String = "█".repeat(obs.max(0.0) as usize);
            report.push_str(&format!(
                "  {:5}   {:7.2}%   {:10.2}%   {:+6.2}  {}\n",
                state,
                obs,
                theo,
                obs - theo,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── DEVIATION ────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Mean Abs Deviation:   {:.3}pp\n",
            self.avg_mean_abs_deviation
        ));
        report.push_str(&format!(
            "  Worst Mean Abs Deviation: {:.3}pp\n",
            self.worst_mean_abs_deviation
        ));
        report.push_str(&format!(
            "  Worst Single State:       {:.3}pp\n\n",
            self.worst_max_abs_deviation
        ));

        if !self.avg_convergence.is_empty() {
            report.push_str("── CONVERGENCE ──────────────────────────────────────────────────\n");
            report.push_str("  Rolls          Avg MAD\n");
            for cp in &self.avg_convergence {
                report.push_str(&format!(
                    "  {:>10}   {:8.3}pp\n",
                    cp.rolls, cp.mean_abs_deviation
                ));
            }
            report.push('\n');
        }

        report.push_str("── ASSESSMENT ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Convergence Rate: {:.1}%\n",
            self.convergence_rate()
        ));
        report.push_str(&format!(
            "  Baseline:         {:.2}% per state (1/7)\n",
            THEORETICAL_PERCENT
        ));
        if self.num_runs > 0 && self.runs_converged < self.num_runs {
            report.push_str("  ⚠️  Some runs outside tolerance - too few rolls per run?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
