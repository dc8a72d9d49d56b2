//! Chain data structures.
//!
//! The chain state is the running sum of die rolls reduced modulo 7. Every
//! field changes together in one step; see `SimulationEngine::apply_roll`.

use crate::constants::{DIE_FACES, NUM_STATES};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A face of a fair six-sided die (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// Returns `None` for anything outside 1..=6.
    pub fn new(value: u8) -> Option<Self> {
        if (1..=DIE_FACES).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Draw a face uniformly at random.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=DIE_FACES))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieFace {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieFace::new(value).ok_or_else(|| format!("die face out of range: {}", value))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.0
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One completed roll, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based index of the roll.
    pub step_index: u64,
    /// Residue after the roll.
    pub residue: u8,
    /// Running total after the roll.
    pub cumulative_sum: u64,
    pub roll_value: DieFace,
}

/// Full chain state.
///
/// `frequency` counts post-roll residues only: the starting residue 0 is not
/// a visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    pub residue: u8,
    pub cumulative_sum: u64,
    pub roll_count: u64,
    pub last_roll: Option<DieFace>,
    pub frequency: [u64; NUM_STATES],
    pub history: Vec<StepRecord>,
}

impl ChainState {
    pub fn new() -> Self {
        Self {
            residue: 0,
            cumulative_sum: 0,
            roll_count: 0,
            last_roll: None,
            frequency: [0; NUM_STATES],
            history: Vec::new(),
        }
    }

    /// True once at least one roll has been applied.
    pub fn has_rolled(&self) -> bool {
        self.roll_count > 0
    }
}

impl Default for ChainState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_die_face_accepts_one_through_six() {
        for v in 1..=6 {
            assert_eq!(DieFace::new(v).map(DieFace::value), Some(v));
        }
    }

    #[test]
    fn test_die_face_rejects_out_of_range() {
        assert!(DieFace::new(0).is_none());
        assert!(DieFace::new(7).is_none());
        assert!(DieFace::new(255).is_none());
    }

    #[test]
    fn test_die_roll_stays_in_range_and_hits_every_face() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let face = DieFace::roll(&mut rng);
            assert!((1..=6).contains(&face.value()));
            seen[(face.value() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should appear in 600 rolls");
    }

    #[test]
    fn test_die_face_serde_rejects_invalid_value() {
        assert!(serde_json::from_str::<DieFace>("4").is_ok());
        assert!(serde_json::from_str::<DieFace>("0").is_err());
        assert!(serde_json::from_str::<DieFace>("9").is_err());
    }

    #[test]
    fn test_new_chain_state_is_empty() {
        let state = ChainState::new();
        assert_eq!(state.residue, 0);
        assert_eq!(state.cumulative_sum, 0);
        assert_eq!(state.roll_count, 0);
        assert!(state.last_roll.is_none());
        assert_eq!(state.frequency, [0; 7]);
        assert!(state.history.is_empty());
        assert!(!state.has_rolled());
    }
}
