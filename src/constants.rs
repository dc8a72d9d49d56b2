// Chain shape
pub const MODULUS: u8 = 7;
pub const NUM_STATES: usize = MODULUS as usize;
pub const DIE_FACES: u8 = 6;

// Statistics
pub const THEORETICAL_PERCENT: f64 = 100.0 / NUM_STATES as f64;
pub const DISTRIBUTION_DECIMALS: i32 = 1;

// Presentation
pub const HISTORY_WINDOW: usize = 50;
pub const INPUT_POLL_MS: u64 = 50;

// Driver timing
pub const MAX_FRAME_DT_MS: u64 = 1000; // clamp after suspend/lag

// Simulator defaults
pub const DEFAULT_SIM_RUNS: u32 = 20;
pub const DEFAULT_SIM_ROLLS: u64 = 100_000;
pub const DEFAULT_TOLERANCE_PCT: f64 = 1.0;

// Files under ~/.markov_dice/
pub const APP_DIR_NAME: &str = ".markov_dice";
pub const LOG_FILE_NAME: &str = "markov_dice.log";
