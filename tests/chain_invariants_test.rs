//! Integration test: chain invariants and reference scenarios
//!
//! Exercises the engine through its public API: scripted roll sequences,
//! seeded random runs and property checks over arbitrary roll scripts.

use markov_dice::{DieFace, SimulationEngine, THEORETICAL_PERCENT};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn face(v: u8) -> DieFace {
    DieFace::new(v).expect("test rolls are 1..=6")
}

/// Apply a scripted roll sequence to a fresh engine
fn run_script(rolls: &[u8]) -> SimulationEngine {
    let mut engine = SimulationEngine::new();
    for &r in rolls {
        engine.apply_roll(face(r));
    }
    engine
}

fn assert_invariants(engine: &SimulationEngine) {
    let state = engine.state();
    assert!(state.residue <= 6);
    assert_eq!(state.residue as u64, state.cumulative_sum % 7);
    assert_eq!(state.frequency.iter().sum::<u64>(), state.roll_count);
    assert_eq!(state.history.len() as u64, state.roll_count);
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_scenario_single_roll() {
    let engine = run_script(&[3]);
    assert_eq!(engine.cumulative_sum(), 3);
    assert_eq!(engine.residue(), 3);
    assert_eq!(engine.roll_count(), 1);
    assert_eq!(engine.frequency(), &[0, 0, 0, 1, 0, 0, 0]);
}

#[test]
fn test_scenario_continue_past_seven() {
    let mut engine = run_script(&[3]);
    engine.apply_roll(face(5));
    assert_eq!(engine.cumulative_sum(), 8);
    assert_eq!(engine.residue(), 1);
    assert_eq!(engine.frequency(), &[0, 1, 0, 1, 0, 0, 0]);
}

#[test]
fn test_scenario_seven_sixes_then_reset() {
    let mut engine = run_script(&[6, 6, 6, 6, 6, 6, 6]);
    assert_eq!(engine.cumulative_sum(), 42);
    assert_eq!(engine.residue(), 0);
    assert_eq!(engine.roll_count(), 7);
    assert_eq!(engine.frequency(), &[1, 1, 1, 1, 1, 1, 1]);

    // Uniform visits: every state at 14.3%, deviation ~0 within rounding
    for pct in engine.observed_distribution() {
        assert!((pct - THEORETICAL_PERCENT).abs() < 0.05);
    }
    assert!(engine.mean_absolute_deviation() < 0.05);

    engine.reset();
    assert_eq!(engine, SimulationEngine::new());
    assert!(engine.last_roll().is_none());
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = run_script(&[1, 2, 3, 4]);
    once.reset();

    let mut twice = run_script(&[1, 2, 3, 4]);
    twice.reset();
    twice.reset();

    assert_eq!(once, twice);
    assert_eq!(once.state(), SimulationEngine::new().state());
}

// =============================================================================
// Seeded runs
// =============================================================================

#[test]
fn test_invariants_hold_after_every_random_step() {
    let mut rng = ChaCha8Rng::seed_from_u64(31337);
    let mut engine = SimulationEngine::new();
    for _ in 0..2_000 {
        engine.advance(&mut rng);
        assert_invariants(&engine);
    }
}

#[test]
fn test_recent_history_after_200_rolls() {
    let mut rng = ChaCha8Rng::seed_from_u64(200);
    let mut engine = SimulationEngine::new();
    for _ in 0..200 {
        engine.advance(&mut rng);
    }

    let history_before = engine.history().to_vec();
    let window = engine.recent_history(50);

    assert_eq!(window, &history_before[150..200]);
    assert!(window.windows(2).all(|w| w[0].step_index + 1 == w[1].step_index));
    // Reading the window leaves the history untouched
    assert_eq!(engine.history(), history_before.as_slice());
}

#[test]
fn test_distribution_converges_over_100k_rolls() {
    let mut rng = ChaCha8Rng::seed_from_u64(100_000);
    let mut engine = SimulationEngine::new();
    for _ in 0..100_000 {
        engine.advance(&mut rng);
    }

    let observed = engine.observed_distribution();
    let theoretical = engine.theoretical_distribution();
    for (state, (obs, theo)) in observed.iter().zip(theoretical.iter()).enumerate() {
        assert!(
            (obs - theo).abs() <= 1.0,
            "state {} observed {:.1}% vs {:.2}%",
            state,
            obs,
            theo
        );
    }
    assert!(engine.mean_absolute_deviation() < 0.5);
}

#[test]
fn test_chain_never_stays_in_place() {
    // No face is a multiple of 7, so consecutive residues always differ
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut engine = SimulationEngine::new();
    let mut previous = engine.residue();
    for _ in 0..1_000 {
        let current = engine.advance(&mut rng).residue;
        assert_ne!(current, previous);
        previous = current;
    }
}

#[test]
fn test_state_serializes_to_json() {
    let engine = run_script(&[2, 5]);
    let json = serde_json::to_string(engine.state()).unwrap();
    let back: markov_dice::ChainState = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, engine.state());
    assert!(json.contains("\"roll_value\":5"));
}

// =============================================================================
// Properties over arbitrary roll scripts
// =============================================================================

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_script(rolls in prop::collection::vec(1u8..=6, 0..400)) {
        let mut engine = SimulationEngine::new();
        for &r in &rolls {
            engine.apply_roll(face(r));
            let state = engine.state();
            prop_assert!(state.residue <= 6);
            prop_assert_eq!(state.residue as u64, state.cumulative_sum % 7);
            prop_assert_eq!(state.frequency.iter().sum::<u64>(), state.roll_count);
            prop_assert_eq!(state.history.len() as u64, state.roll_count);
        }
        prop_assert_eq!(engine.cumulative_sum(), rolls.iter().map(|&r| r as u64).sum::<u64>());
    }

    #[test]
    fn prop_same_script_same_state(rolls in prop::collection::vec(1u8..=6, 0..200)) {
        prop_assert_eq!(run_script(&rolls), run_script(&rolls));
    }

    #[test]
    fn prop_recent_history_is_suffix(
        rolls in prop::collection::vec(1u8..=6, 0..200),
        n in 0usize..250,
    ) {
        let engine = run_script(&rolls);
        let window = engine.recent_history(n);
        let history = engine.history();
        prop_assert_eq!(window.len(), n.min(history.len()));
        prop_assert_eq!(window, &history[history.len() - window.len()..]);
    }

    #[test]
    fn prop_observed_distribution_sums_near_100(rolls in prop::collection::vec(1u8..=6, 1..300)) {
        let engine = run_script(&rolls);
        let total: f64 = engine.observed_distribution().iter().sum();
        // Seven values each rounded by at most 0.05
        prop_assert!((total - 100.0).abs() <= 0.35 + 1e-9);
    }
}
