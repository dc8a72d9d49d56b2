//! Run/pause/speed controller that steps the chain on a fixed interval.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_driver, DriverInput};
pub use types::{Driver, Speed};
