//! Driver data structures.
//!
//! The driver owns the engine together with the run/pause flag and the speed
//! setting. Wall-clock time is fed in through `tick_driver`.

use crate::chain::SimulationEngine;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Roll interval presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Speed {
    VeryFast,
    Fast,
    #[default]
    Medium,
    Slow,
}

impl Speed {
    /// All presets, fastest first.
    pub const ALL: [Speed; 4] = [Speed::VeryFast, Speed::Fast, Speed::Medium, Speed::Slow];

    /// Milliseconds between rolls while running.
    pub fn interval_ms(&self) -> u64 {
        match self {
            Self::VeryFast => 100,
            Self::Fast => 300,
            Self::Medium => 500,
            Self::Slow => 1000,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::VeryFast => "Very fast",
            Self::Fast => "Fast",
            Self::Medium => "Medium",
            Self::Slow => "Slow",
        }
    }

    /// Look up a preset by its interval.
    pub fn from_interval_ms(ms: u64) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|s| s.interval_ms() == ms)
            .ok_or(AppError::InvalidSpeed(ms))
    }

    /// Next faster preset (saturates at `VeryFast`).
    pub fn faster(&self) -> Self {
        match self {
            Self::VeryFast | Self::Fast => Self::VeryFast,
            Self::Medium => Self::Fast,
            Self::Slow => Self::Medium,
        }
    }

    /// Next slower preset (saturates at `Slow`).
    pub fn slower(&self) -> Self {
        match self {
            Self::VeryFast => Self::Fast,
            Self::Fast => Self::Medium,
            Self::Medium | Self::Slow => Self::Slow,
        }
    }
}

/// Controller state around one engine.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    pub engine: SimulationEngine,
    /// True while the periodic roll is active.
    pub running: bool,
    pub speed: Speed,
    /// Sub-interval time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
}

impl Driver {
    pub fn new(speed: Speed) -> Self {
        Self {
            engine: SimulationEngine::new(),
            running: false,
            speed,
            accumulated_time_ms: 0,
        }
    }

    /// Label for the start/pause/resume control.
    pub fn primary_label(&self) -> &'static str {
        if !self.engine.has_rolled() {
            "Start"
        } else if self.running {
            "Pause"
        } else {
            "Resume"
        }
    }
}
