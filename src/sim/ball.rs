//! Ball physics
//!
//! The ball only has one degree of freedom: it rolls along the lever. Its
//! height is read off the lever line every tick rather than integrated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::lever::LeverState;
use crate::consts::*;
use crate::settings::Tuning;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    /// Horizontal velocity (pixels/tick)
    pub vel_x: f32,
    pub radius: f32,
    pub in_play: bool,
}

impl Default for BallState {
    fn default() -> Self {
        Self {
            pos: Vec2::new(Self::start_x(), BOTTOM_LIMIT - BALL_RADIUS - (LEVER_WIDTH / 2.0).trunc()),
            vel_x: 0.0,
            radius: BALL_RADIUS,
            in_play: false,
        }
    }
}

impl BallState {
    /// Where the lever picks up the ball, against the right wall
    pub fn start_x() -> f32 {
        RIGHT_LIMIT - BALL_RADIUS
    }

    pub fn min_x(&self) -> f32 {
        LEFT_LIMIT + self.radius
    }

    pub fn max_x(&self) -> f32 {
        RIGHT_LIMIT - self.radius
    }

    /// Put a fresh ball on the lever at the pickup point
    pub fn place(&mut self, lever: &LeverState) {
        self.pos.x = Self::start_x();
        self.vel_x = 0.0;
        self.in_play = true;
        self.settle_on(lever);
    }

    /// Take the ball off the lever (it dropped into a hole)
    pub fn drop_out(&mut self) {
        self.in_play = false;
        self.vel_x = 0.0;
    }

    /// Advance one tick on the given lever. No-op while out of play.
    pub fn step(&mut self, lever: &LeverState, tuning: &Tuning) {
        if !self.in_play {
            return;
        }

        let acc_x = tuning.gravity_acc * lever.tilt();
        self.vel_x = apply_friction(self.vel_x, acc_x, tuning.friction_threshold);

        // Whole pixels only
        self.pos.x += self.vel_x.trunc();

        if self.pos.x < self.min_x() {
            self.pos.x = self.min_x();
            self.vel_x = 0.0;
        } else if self.pos.x > self.max_x() {
            self.pos.x = self.max_x();
            self.vel_x = 0.0;
        }

        self.settle_on(lever);
    }

    /// Rest the ball on top of the lever at its current x
    ///
    /// The extra pixel keeps the ball visibly touching the bar.
    fn settle_on(&mut self, lever: &LeverState) {
        self.pos.y = lever.height_at(self.pos.x).ceil() - (LEVER_WIDTH / 2.0).trunc() - self.radius + 1.0;
    }
}

/// Integrate velocity unless friction holds the ball
///
/// A slow ball on a shallow slope stays put; once moving there is no drag
/// and no speed cap.
#[inline]
pub fn apply_friction(vel_x: f32, acc_x: f32, threshold: f32) -> f32 {
    if vel_x.abs() <= threshold && acc_x.abs() <= threshold {
        0.0
    } else {
        vel_x + acc_x
    }
}
