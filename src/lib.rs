//! Markov Dice - a mod-7 dice chain and its terminal visualizer.
//!
//! This module exposes the chain engine, the run driver and the simulator
//! for testing and for the two binaries.

pub mod build_info;
pub mod chain;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use chain::{ChainState, DieFace, SimulationEngine, StepRecord, TransitionMatrix};
pub use config::AppConfig;
pub use constants::*;
pub use driver::{Driver, DriverInput, Speed};
pub use error::AppError;
