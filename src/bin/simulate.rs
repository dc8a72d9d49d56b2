//! Monte Carlo CLI for the mod-7 dice chain.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 20 chains x 100,000 rolls
//!   cargo run --bin simulate -- -n 100 -r 5000   # 100 short chains
//!   cargo run --bin simulate -- --seed 42        # Reproducible run
//!   cargo run --bin simulate -- --study --json   # Long chains, save JSON

use clap::Parser;
use markov_dice::simulator::{run_simulation, SimConfig};
use markov_dice::utils::paths::write_json;
use markov_dice::{build_info, logging, AppError};
use std::path::PathBuf;
use tracing::info;

/// Run many independent dice chains and report how the states even out
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(version = build_info::BUILD_VERSION)]
struct Args {
    /// Number of independent chains
    #[arg(short = 'n', long)]
    runs: Option<u32>,

    /// Rolls per chain
    #[arg(short, long)]
    rolls: Option<u64>,

    /// Random seed for reproducibility (run i uses seed + i)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Convergence tolerance in percentage points
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Quick check (5 chains x 10,000 rolls)
    #[arg(long, conflicts_with = "study")]
    quick: bool,

    /// Convergence study (50 chains x 1,000,000 rolls, ±0.5pp)
    #[arg(long)]
    study: bool,

    /// Per-run logging
    #[arg(short, long)]
    verbose: bool,

    /// Save the report as JSON (default: sim_report_<timestamp>.json)
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    json: Option<String>,
}

impl Args {
    fn to_config(&self) -> SimConfig {
        let mut config = if self.quick {
            SimConfig::quick()
        } else if self.study {
            SimConfig::convergence_study()
        } else {
            SimConfig::default()
        };

        if let Some(runs) = self.runs {
            config.num_runs = runs;
        }
        if let Some(rolls) = self.rolls {
            config.rolls_per_run = rolls;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance_pct = tolerance.abs();
        }
        config.seed = self.seed;
        if self.verbose {
            config.verbosity = 2;
        }
        config
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init_stderr_logging(args.verbose)?;

    let config = args.to_config();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MOD-7 DICE CHAIN SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Rolls per Run:  {}", config.rolls_per_run);
    println!("  Tolerance:      ±{:.2}pp", config.tolerance_pct);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if let Some(ref target) = args.json {
        let path = if target.is_empty() {
            PathBuf::from(format!(
                "sim_report_{}.json",
                chrono::Utc::now().format("%Y%m%d_%H%M%S")
            ))
        } else {
            PathBuf::from(target)
        };
        write_json(&path, &report)?;
        info!(path = %path.display(), "JSON report saved");
        println!("JSON report saved to: {}", path.display());
    }

    Ok(())
}
