//! Game settings and tuning
//!
//! Loaded from a JSON file next to the binary. Every field has a default, so
//! a partial file (or none at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{BOTTOM_LIMIT, TICKS_PER_SECOND, TOP_LIMIT};
use crate::error::ConfigError;
use crate::sim::LeverState;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Nut speed while the machine resets the lever (pixels/tick)
    pub lever_setup_speed: f32,
    /// Nut speed under player control (pixels/tick)
    pub lever_speed: f32,
    /// Maximum height difference between the two nuts
    pub max_lever_gap: f32,
    /// Freefall acceleration, scaled by tilt into rolling acceleration
    pub gravity_acc: f32,
    /// Below this velocity and acceleration the ball is held by friction
    pub friction_threshold: f32,
    /// Balls per game
    pub starting_balls: u32,
    /// Goal `n` (0-based) starts worth `(n + 1) * goal_score_step`
    pub goal_score_step: u32,
    /// Points lost from the current score per decay period
    pub score_decay_step: u32,
    /// Seconds of player control per score decay
    pub score_decay_secs: f32,
    /// Seconds between target goal flash toggles
    pub goal_flash_secs: f32,
    /// Fraction of the ball diameter that must cover a hole to drop in
    pub coverage_threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lever_setup_speed: 5.0,
            lever_speed: 2.0,
            max_lever_gap: 60.0,
            gravity_acc: 10.0,
            friction_threshold: 0.05,
            starting_balls: 3,
            goal_score_step: 100,
            score_decay_step: 10,
            score_decay_secs: 3.0,
            goal_flash_secs: 0.5,
            coverage_threshold: 0.8,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

impl Tuning {
    /// Reject values the simulation cannot make progress with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("lever_setup_speed", self.lever_setup_speed)?;
        positive("lever_speed", self.lever_speed)?;
        positive("max_lever_gap", self.max_lever_gap)?;
        positive("score_decay_secs", self.score_decay_secs)?;
        positive("goal_flash_secs", self.goal_flash_secs)?;

        self.validate_lever()?;

        if !(self.gravity_acc.is_finite() && self.friction_threshold.is_finite()) {
            return Err(ConfigError::InvalidTuning {
                field: "gravity_acc",
                reason: "gravity and friction must be finite".to_string(),
            });
        }
        if self.friction_threshold < 0.0 {
            return Err(ConfigError::InvalidTuning {
                field: "friction_threshold",
                reason: format!("must not be negative, got {}", self.friction_threshold),
            });
        }
        if self.starting_balls == 0 {
            return Err(ConfigError::InvalidTuning {
                field: "starting_balls",
                reason: "at least one ball is required".to_string(),
            });
        }
        if !(self.coverage_threshold > 0.0 && self.coverage_threshold <= 1.0) {
            return Err(ConfigError::InvalidTuning {
                field: "coverage_threshold",
                reason: format!("must be in (0, 1], got {}", self.coverage_threshold),
            });
        }
        Ok(())
    }

    /// The player must be able to move the lever from where setup leaves it
    fn validate_lever(&self) -> Result<(), ConfigError> {
        let start = LeverState::starting_position(self.lever_setup_speed);
        let high = start.left_nut_height.min(start.right_nut_height);
        let low = start.left_nut_height.max(start.right_nut_height);

        if high < TOP_LIMIT || low > BOTTOM_LIMIT {
            return Err(ConfigError::InvalidTuning {
                field: "lever_setup_speed",
                reason: format!(
                    "setup would park the lever off the screw at {} / {}",
                    start.left_nut_height, start.right_nut_height
                ),
            });
        }
        if start.gap() > self.max_lever_gap {
            return Err(ConfigError::InvalidTuning {
                field: "max_lever_gap",
                reason: format!(
                    "lever starts with a gap of {}, above the maximum {}",
                    start.gap(),
                    self.max_lever_gap
                ),
            });
        }
        let room = (high - TOP_LIMIT).max(BOTTOM_LIMIT - low);
        if self.lever_speed > room {
            return Err(ConfigError::InvalidTuning {
                field: "lever_speed",
                reason: format!("a {} px step leaves the screw from the start position", self.lever_speed),
            });
        }
        Ok(())
    }

    /// Starting value of the current score for goal `index`
    ///
    /// Saturates rather than overflowing on oversized steps.
    pub fn goal_value(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_add(1)
            .saturating_mul(self.goal_score_step)
    }
}

/// Frontend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation and render rate
    pub ticks_per_second: u32,
    /// Log destination. No file means no logging (the game owns the terminal)
    pub log_file: Option<PathBuf>,
    /// Show measured frame rate in the HUD
    pub show_fps: bool,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,
            log_file: None,
            show_fps: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Self = Self::from_json(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::InvalidTickRate(self.ticks_per_second));
        }
        self.tuning.validate()
    }

    /// Fixed timestep in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }
}
