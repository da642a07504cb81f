//! Platform abstraction layer
//!
//! Handles terminal specifics for:
//! - Input events (key presses latched into per-tick snapshots)
//! - Time/ticks (fixed-rate frame pacing)

pub mod input;
pub mod time;

pub use input::{InputLatch, KeyBindings};
pub use time::FrameClock;
