//! Driver logic: input processing and fixed-interval stepping.

use super::types::{Driver, Speed};
use crate::constants::MAX_FRAME_DT_MS;
use rand::Rng;
use tracing::{debug, info};

/// UI-agnostic input actions for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverInput {
    Toggle, // Start / Pause / Resume
    Step,   // Single roll while paused
    Reset,
    Faster,
    Slower,
    SetSpeed(Speed),
    Other,
}

/// Process one input. Returns true if the engine or driver state changed.
pub fn process_input<R: Rng + ?Sized>(driver: &mut Driver, input: DriverInput, rng: &mut R) -> bool {
    match input {
        DriverInput::Toggle => {
            if !driver.engine.has_rolled() {
                // Start: roll immediately, then keep rolling on the timer
                driver.engine.advance(rng);
                driver.running = true;
                driver.accumulated_time_ms = 0;
                info!(speed_ms = driver.speed.interval_ms(), "chain started");
            } else {
                driver.running = !driver.running;
                info!(running = driver.running, rolls = driver.engine.roll_count(), "run toggled");
            }
            true
        }
        DriverInput::Step => {
            if driver.running {
                return false;
            }
            let state = driver.engine.advance(rng);
            debug!(step = state.roll_count, residue = state.residue, "single roll");
            true
        }
        DriverInput::Reset => {
            driver.engine.reset();
            driver.running = false;
            driver.accumulated_time_ms = 0;
            info!("chain reset");
            true
        }
        DriverInput::Faster => set_speed(driver, driver.speed.faster()),
        DriverInput::Slower => set_speed(driver, driver.speed.slower()),
        DriverInput::SetSpeed(speed) => set_speed(driver, speed),
        DriverInput::Other => false,
    }
}

fn set_speed(driver: &mut Driver, speed: Speed) -> bool {
    if driver.speed == speed {
        return false;
    }
    driver.speed = speed;
    // A shorter interval must not fire a burst of queued rolls
    driver.accumulated_time_ms = driver.accumulated_time_ms.min(speed.interval_ms() - 1);
    info!(speed = speed.name(), interval_ms = speed.interval_ms(), "speed changed");
    true
}

/// Advance the driver by `dt_ms` of wall-clock time.
///
/// Rolls once per whole interval elapsed while running and returns the
/// number of rolls taken. Paused drivers ignore time entirely.
pub fn tick_driver<R: Rng + ?Sized>(driver: &mut Driver, dt_ms: u64, rng: &mut R) -> u32 {
    if !driver.running {
        return 0;
    }

    // Clamp dt to prevent a flood of rolls after suspend/lag
    let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);

    driver.accumulated_time_ms += dt_ms;
    let interval = driver.speed.interval_ms();
    let mut steps = 0;

    while driver.accumulated_time_ms >= interval {
        driver.accumulated_time_ms -= interval;
        driver.engine.advance(rng);
        steps += 1;
    }

    if steps > 0 {
        debug!(
            steps,
            rolls = driver.engine.roll_count(),
            residue = driver.engine.residue(),
            "timer rolls"
        );
    }

    steps
}
