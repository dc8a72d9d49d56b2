//! Chain stepping and derived statistics.

use super::types::{ChainState, DieFace, StepRecord};
use crate::constants::{DISTRIBUTION_DECIMALS, MODULUS, NUM_STATES, THEORETICAL_PERCENT};
use rand::Rng;

/// Owns the chain state and advances it one die roll at a time.
///
/// Randomness is always injected: `advance` draws from the caller's RNG and
/// `apply_roll` takes a face directly, so a fixed seed or a scripted roll
/// sequence reproduces a run exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationEngine {
    state: ChainState,
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self {
            state: ChainState::new(),
        }
    }

    /// Roll the die once and apply the result.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ChainState {
        let face = DieFace::roll(rng);
        self.apply_roll(face)
    }

    /// Apply a known roll. All fields are updated together.
    pub fn apply_roll(&mut self, face: DieFace) -> &ChainState {
        let state = &mut self.state;

        let new_sum = state.cumulative_sum + face.value() as u64;
        let new_residue = (new_sum % MODULUS as u64) as u8;
        let step_index = state.roll_count + 1;

        state.history.push(StepRecord {
            step_index,
            residue: new_residue,
            cumulative_sum: new_sum,
            roll_value: face,
        });
        state.frequency[new_residue as usize] += 1;
        state.residue = new_residue;
        state.cumulative_sum = new_sum;
        state.roll_count = step_index;
        state.last_roll = Some(face);

        debug_assert!(state.residue < MODULUS);
        debug_assert_eq!(state.residue as u64, state.cumulative_sum % MODULUS as u64);
        debug_assert_eq!(state.history.len() as u64, state.roll_count);
        debug_assert_eq!(state.frequency.iter().sum::<u64>(), state.roll_count);

        &self.state
    }

    /// Restore the freshly constructed state.
    pub fn reset(&mut self) {
        self.state = ChainState::new();
    }

    pub fn state(&self) -> &ChainState {
        &self.state
    }

    pub fn residue(&self) -> u8 {
        self.state.residue
    }

    pub fn cumulative_sum(&self) -> u64 {
        self.state.cumulative_sum
    }

    pub fn roll_count(&self) -> u64 {
        self.state.roll_count
    }

    pub fn last_roll(&self) -> Option<DieFace> {
        self.state.last_roll
    }

    pub fn frequency(&self) -> &[u64; NUM_STATES] {
        &self.state.frequency
    }

    pub fn history(&self) -> &[StepRecord] {
        &self.state.history
    }

    pub fn has_rolled(&self) -> bool {
        self.state.has_rolled()
    }

    /// Percentage of rolls that landed on each residue, rounded to one
    /// decimal place. All zeros before the first roll.
    pub fn observed_distribution(&self) -> [f64; NUM_STATES] {
        let mut out = [0.0; NUM_STATES];
        if self.state.roll_count == 0 {
            return out;
        }
        let total = self.state.roll_count as f64;
        for (pct, &count) in out.iter_mut().zip(self.state.frequency.iter()) {
            *pct = round_to(count as f64 / total * 100.0, DISTRIBUTION_DECIMALS);
        }
        out
    }

    /// Uniform long-run visitation: 100/7 percent per residue.
    pub fn theoretical_distribution(&self) -> [f64; NUM_STATES] {
        theoretical_distribution()
    }

    /// Mean of `|observed - 100/7|` over the seven residues, in percentage
    /// points. Zero before the first roll.
    pub fn mean_absolute_deviation(&self) -> f64 {
        if self.state.roll_count == 0 {
            return 0.0;
        }
        let observed = self.observed_distribution();
        observed
            .iter()
            .map(|pct| (pct - THEORETICAL_PERCENT).abs())
            .sum::<f64>()
            / NUM_STATES as f64
    }

    /// Largest single-residue deviation from 100/7, in percentage points.
    pub fn max_absolute_deviation(&self) -> f64 {
        if self.state.roll_count == 0 {
            return 0.0;
        }
        self.observed_distribution()
            .iter()
            .map(|pct| (pct - THEORETICAL_PERCENT).abs())
            .fold(0.0, f64::max)
    }

    /// Up to `n` most recent steps, oldest first.
    pub fn recent_history(&self, n: usize) -> &[StepRecord] {
        let history = &self.state.history;
        &history[history.len().saturating_sub(n)..]
    }
}

/// Uniform long-run visitation: 100/7 percent per residue.
pub fn theoretical_distribution() -> [f64; NUM_STATES] {
    [THEORETICAL_PERCENT; NUM_STATES]
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
