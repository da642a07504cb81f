//! Ice Cold Beer - a lever-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lever, ball physics, holes, game state)
//! - `renderer`: Terminal rendering of simulation snapshots
//! - `platform`: Terminal input and frame pacing
//! - `settings`: Configuration and data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Settings, Tuning};

/// Playfield geometry constants
///
/// Coordinates are pixels of the 700x700 cabinet artwork, with y
/// growing downward. A nut "height" is therefore a y coordinate: raising a
/// nut makes it smaller.
pub mod consts {
    /// Default simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 30;

    /// Cabinet dimensions
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 700.0;

    /// Playing area
    pub const LEFT_LIMIT: f32 = 145.0;
    pub const RIGHT_LIMIT: f32 = 547.0;
    pub const TOP_LIMIT: f32 = 10.0;
    pub const BOTTOM_LIMIT: f32 = FIELD_HEIGHT - 10.0;

    /// Nut heights where the lever picks the ball up, below the field
    pub const LEFT_NUT_SETUP_HEIGHT: f32 = BOTTOM_LIMIT + 40.0;
    pub const RIGHT_NUT_SETUP_HEIGHT: f32 = BOTTOM_LIMIT + 50.0;
    /// Nut heights where the player takes over
    pub const LEFT_NUT_STARTING_HEIGHT: f32 = 570.0;
    pub const RIGHT_NUT_STARTING_HEIGHT: f32 = 585.0;

    /// Lever thickness (pixels)
    pub const LEVER_WIDTH: f32 = 10.0;

    /// Ball
    pub const BALL_RADIUS: f32 = 8.0;

    /// HUD digit counts
    pub const BALLS_REMAINING_DIGITS: usize = 1;
    pub const CURRENT_SCORE_DIGITS: usize = 3;
    pub const TOTAL_SCORE_DIGITS: usize = 4;

    /// Shown in place of the total score after the ball drops into a decoy
    pub const MISS_TEXT: &str = "OOPS";
}

/// Left-pad `number` with zeros to `width` characters. Longer numbers are
/// never truncated.
pub fn pad_number(number: u32, width: usize) -> String {
    format!("{number:0width$}")
}
