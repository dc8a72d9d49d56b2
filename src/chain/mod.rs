//! Dice-driven Markov chain: running sum of die rolls modulo 7.

pub mod engine;
pub mod transition;
pub mod types;

pub use engine::{theoretical_distribution, SimulationEngine};
pub use transition::TransitionMatrix;
pub use types::{ChainState, DieFace, StepRecord};
