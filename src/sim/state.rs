//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::ball::BallState;
use super::holes::{Hole, HoleRegistry};
use super::lever::LeverState;
use crate::error::ConfigError;
use crate::settings::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Instructions on screen, waiting for acknowledgment
    Intro,
    /// Lever lowering to pick up a ball
    SetupDescending,
    /// Lever raising the ball to the starting position
    SetupAscending,
    /// Player has the controls
    PlayerControl,
    /// Last goal sunk, waiting for acknowledgment
    GameWon,
    /// Last ball lost, waiting for acknowledgment
    GameLost,
}

impl GamePhase {
    /// Phases that suspend the simulation until acknowledged
    pub fn is_modal(&self) -> bool {
        matches!(self, GamePhase::Intro | GamePhase::GameWon | GamePhase::GameLost)
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    IntroAcknowledged,
    /// Lever reached the pickup position and took a ball
    BallPlaced,
    PlayerControlGained,
    /// The target goal was sunk and the next one is now the target
    GoalAdvance { goal_index: usize, points: u32 },
    /// Ball dropped into a decoy with balls to spare
    LifeLost { balls_remaining: u32 },
    GameWon { total_score: u32 },
    GameLost { total_score: u32 },
    ScoreDecayed { current_score: u32 },
    /// Round finished and the scores were restored
    Reset,
}

/// Scores, lives and goal progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points the target goal is currently worth
    pub current_score: u32,
    pub total_score: u32,
    pub balls_remaining: u32,
    pub target_goal_index: usize,
    /// Seconds of player control since the last decay
    pub current_score_time: f32,
    /// Show the miss indicator instead of the total
    pub show_miss: bool,
}

impl ScoreState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            current_score: tuning.goal_value(0),
            total_score: 0,
            balls_remaining: tuning.starting_balls,
            target_goal_index: 0,
            current_score_time: 0.0,
            show_miss: false,
        }
    }
}

/// Target goal flasher
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalFlash {
    pub on: bool,
    pub elapsed: f32,
}

impl Default for GoalFlash {
    fn default() -> Self {
        Self {
            on: true,
            elapsed: 0.0,
        }
    }
}

impl GoalFlash {
    pub fn advance(&mut self, dt: f32, period: f32) {
        self.elapsed += dt;
        if self.elapsed >= period {
            self.elapsed = 0.0;
            self.on = !self.on;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub lever: LeverState,
    pub ball: BallState,
    pub score: ScoreState,
    pub goal_flash: GoalFlash,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    holes: HoleRegistry,
}

impl GameState {
    /// Create a game on the standard layout
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        Self::with_holes(HoleRegistry::standard(), tuning)
    }

    /// Create a game on a custom layout
    pub fn with_holes(holes: HoleRegistry, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        if holes.goal_sequence().is_empty() {
            return Err(ConfigError::EmptyGoalSequence);
        }

        Ok(Self {
            phase: GamePhase::Intro,
            lever: LeverState::default(),
            ball: BallState::default(),
            score: ScoreState::new(&tuning),
            goal_flash: GoalFlash::default(),
            tuning,
            time_ticks: 0,
            holes,
        })
    }

    pub fn holes(&self) -> &HoleRegistry {
        &self.holes
    }

    pub fn target_goal(&self) -> &Hole {
        // `with_holes` guarantees at least one goal and the index never
        // passes the last goal
        &self.holes.goal_sequence()[self.score.target_goal_index]
    }

    /// Restore scores and lives for a new round. The lever and hole layout
    /// are left alone; the next setup cycle fetches a fresh ball.
    pub fn reset(&mut self) {
        self.score = ScoreState::new(&self.tuning);
        self.ball.drop_out();
        self.phase = GamePhase::SetupDescending;
    }
}
