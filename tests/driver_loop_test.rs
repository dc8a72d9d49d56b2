//! Integration test: driver loop
//!
//! Simulates the terminal loop without a terminal: inputs go through
//! `process_input`, wall-clock time through `tick_driver`.

use markov_dice::driver::{process_input, tick_driver};
use markov_dice::{Driver, DriverInput, Speed};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Frame length used by the simulated loop
const FRAME_MS: u64 = 50;

/// Run `frames` frames of `FRAME_MS` each, returning rolls taken
fn run_frames(driver: &mut Driver, rng: &mut ChaCha8Rng, frames: u32) -> u32 {
    (0..frames).map(|_| tick_driver(driver, FRAME_MS, rng)).sum()
}

#[test]
fn test_session_start_pause_resume() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut driver = Driver::new(Speed::VeryFast);

    // Nothing happens before Start
    assert_eq!(run_frames(&mut driver, &mut rng, 20), 0);
    assert_eq!(driver.engine.roll_count(), 0);

    // Start: immediate roll, then one roll per 100ms
    process_input(&mut driver, DriverInput::Toggle, &mut rng);
    assert_eq!(driver.engine.roll_count(), 1);
    assert_eq!(run_frames(&mut driver, &mut rng, 20), 10); // 1s
    assert_eq!(driver.engine.roll_count(), 11);

    // Pause: time passes, no rolls
    process_input(&mut driver, DriverInput::Toggle, &mut rng);
    assert_eq!(driver.primary_label(), "Resume");
    assert_eq!(run_frames(&mut driver, &mut rng, 40), 0);
    assert_eq!(driver.engine.roll_count(), 11);

    // Manual step while paused
    process_input(&mut driver, DriverInput::Step, &mut rng);
    assert_eq!(driver.engine.roll_count(), 12);

    // Resume
    process_input(&mut driver, DriverInput::Toggle, &mut rng);
    assert!(driver.running);
    assert_eq!(run_frames(&mut driver, &mut rng, 4), 2);
}

#[test]
fn test_each_speed_preset_roll_rate() {
    for speed in Speed::ALL {
        let mut rng = ChaCha8Rng::seed_from_u64(speed.interval_ms());
        let mut driver = Driver::new(speed);
        process_input(&mut driver, DriverInput::Toggle, &mut rng);

        // 3 seconds of frames
        let rolls = run_frames(&mut driver, &mut rng, 60);
        assert_eq!(rolls as u64, 3000 / speed.interval_ms(), "{:?}", speed);
    }
}

#[test]
fn test_speed_change_mid_run() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut driver = Driver::new(Speed::Slow);
    process_input(&mut driver, DriverInput::Toggle, &mut rng);

    assert_eq!(run_frames(&mut driver, &mut rng, 10), 0); // 500ms of 1000ms

    process_input(&mut driver, DriverInput::Faster, &mut rng); // -> Medium (500ms)
    assert_eq!(driver.speed, Speed::Medium);
    // Accumulator clamped to 499ms, so the next frame fires exactly one roll
    assert_eq!(tick_driver(&mut driver, FRAME_MS, &mut rng), 1);
}

#[test]
fn test_reset_mid_run_returns_to_fresh_state() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut driver = Driver::new(Speed::VeryFast);
    process_input(&mut driver, DriverInput::Toggle, &mut rng);
    run_frames(&mut driver, &mut rng, 30);
    assert!(driver.engine.roll_count() > 0);

    process_input(&mut driver, DriverInput::Reset, &mut rng);
    assert!(!driver.running);
    assert_eq!(driver.engine, markov_dice::SimulationEngine::new());
    assert_eq!(run_frames(&mut driver, &mut rng, 30), 0);
    assert_eq!(driver.primary_label(), "Start");
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let script = [
        DriverInput::Toggle,
        DriverInput::Other,
        DriverInput::Toggle,
        DriverInput::Step,
        DriverInput::Step,
        DriverInput::SetSpeed(Speed::Fast),
        DriverInput::Toggle,
    ];

    let play = || {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut driver = Driver::new(Speed::VeryFast);
        for input in script {
            process_input(&mut driver, input, &mut rng);
            run_frames(&mut driver, &mut rng, 7);
        }
        driver.engine
    };

    assert_eq!(play(), play());
}

#[test]
fn test_invariants_hold_through_driver() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut driver = Driver::new(Speed::VeryFast);
    process_input(&mut driver, DriverInput::Toggle, &mut rng);
    run_frames(&mut driver, &mut rng, 400);

    let state = driver.engine.state();
    assert_eq!(state.roll_count, 1 + 200);
    assert_eq!(state.residue as u64, state.cumulative_sum % 7);
    assert_eq!(state.frequency.iter().sum::<u64>(), state.roll_count);
    assert_eq!(driver.engine.recent_history(50).len(), 50);
}
