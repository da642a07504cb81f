//! Lever kinematics
//!
//! The lever is a bar between two nuts riding on vertical screws at
//! `LEFT_LIMIT` and `RIGHT_LIMIT`. The machine drives the nuts during setup;
//! the player drives them during play.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Tuning;

/// Held nut controls for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverInput {
    pub raise_left: bool,
    pub lower_left: bool,
    pub raise_right: bool,
    pub lower_right: bool,
}

/// Outcome of a machine-driven setup step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupProgress {
    Moving,
    Arrived,
}

/// Nut heights (screen y, smaller is higher)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverState {
    pub left_nut_height: f32,
    pub right_nut_height: f32,
}

impl Default for LeverState {
    /// Parked at the pickup position, below the field
    fn default() -> Self {
        Self {
            left_nut_height: LEFT_NUT_SETUP_HEIGHT,
            right_nut_height: RIGHT_NUT_SETUP_HEIGHT,
        }
    }
}

impl LeverState {
    pub fn new(left_nut_height: f32, right_nut_height: f32) -> Self {
        Self {
            left_nut_height,
            right_nut_height,
        }
    }

    /// Tangent of the lever angle (positive slopes down to the right)
    #[inline]
    pub fn tilt(&self) -> f32 {
        (self.right_nut_height - self.left_nut_height) / (RIGHT_LIMIT - LEFT_LIMIT)
    }

    /// Height of the lever's center line at horizontal position `x`
    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        let ratio = (x - LEFT_LIMIT) / (RIGHT_LIMIT - LEFT_LIMIT);
        self.left_nut_height + (self.right_nut_height - self.left_nut_height) * ratio
    }

    pub fn gap(&self) -> f32 {
        (self.left_nut_height - self.right_nut_height).abs()
    }

    /// Lower both nuts to the pickup position without overshooting
    pub fn descend_to_setup(&mut self, speed: f32) -> SetupProgress {
        self.left_nut_height = approach_down(self.left_nut_height, LEFT_NUT_SETUP_HEIGHT, speed);
        self.right_nut_height = approach_down(self.right_nut_height, RIGHT_NUT_SETUP_HEIGHT, speed);

        if self.left_nut_height == LEFT_NUT_SETUP_HEIGHT
            && self.right_nut_height == RIGHT_NUT_SETUP_HEIGHT
        {
            SetupProgress::Arrived
        } else {
            SetupProgress::Moving
        }
    }

    /// Raise both nuts to the starting position
    ///
    /// A nut may end a step slightly above its starting height; it stops
    /// there until the other nut catches up.
    pub fn ascend_to_start(&mut self, speed: f32) -> SetupProgress {
        if self.left_nut_height > LEFT_NUT_STARTING_HEIGHT {
            self.left_nut_height -= speed;
        }
        if self.right_nut_height > RIGHT_NUT_STARTING_HEIGHT {
            self.right_nut_height -= speed;
        }

        if self.left_nut_height <= LEFT_NUT_STARTING_HEIGHT
            && self.right_nut_height <= RIGHT_NUT_STARTING_HEIGHT
        {
            SetupProgress::Arrived
        } else {
            SetupProgress::Moving
        }
    }

    /// Where `ascend_to_start` leaves the nuts when stepping at `speed`
    /// from the pickup position
    pub fn starting_position(speed: f32) -> Self {
        let land = |from: f32, to: f32| from - ((from - to) / speed).ceil() * speed;
        Self {
            left_nut_height: land(LEFT_NUT_SETUP_HEIGHT, LEFT_NUT_STARTING_HEIGHT),
            right_nut_height: land(RIGHT_NUT_SETUP_HEIGHT, RIGHT_NUT_STARTING_HEIGHT),
        }
    }

    /// Apply player input, all or nothing
    ///
    /// Returns false (and leaves both nuts untouched) if the move would take
    /// a nut off the screw or open the gap past `max_lever_gap`.
    pub fn apply_input(&mut self, input: &LeverInput, tuning: &Tuning) -> bool {
        let mut next = *self;
        let step = tuning.lever_speed;
        if input.raise_left {
            next.left_nut_height -= step;
        }
        if input.lower_left {
            next.left_nut_height += step;
        }
        if input.raise_right {
            next.right_nut_height -= step;
        }
        if input.lower_right {
            next.right_nut_height += step;
        }

        let on_screw = |h: f32| (TOP_LIMIT..=BOTTOM_LIMIT).contains(&h);
        if !on_screw(next.left_nut_height)
            || !on_screw(next.right_nut_height)
            || next.gap() > tuning.max_lever_gap
        {
            log::trace!(
                "Lever move rejected: left {} right {}",
                next.left_nut_height,
                next.right_nut_height
            );
            return false;
        }

        *self = next;
        true
    }
}

/// Move `current` down toward `target`, snapping to it when close or past
fn approach_down(current: f32, target: f32, speed: f32) -> f32 {
    if current < target {
        (current + speed).min(target)
    } else {
        target
    }
}
