//! Read-only view of a game for renderers

use serde::Serialize;

use super::ball::BallState;
use super::holes::Hole;
use super::lever::LeverState;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::pad_number;

/// Full-screen messages that block the game until acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModalMessage {
    Intro,
    Win,
    Lose,
}

impl ModalMessage {
    pub fn for_phase(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::Intro => Some(ModalMessage::Intro),
            GamePhase::GameWon => Some(ModalMessage::Win),
            GamePhase::GameLost => Some(ModalMessage::Lose),
            _ => None,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            ModalMessage::Intro => {
                "Ice Cold Beer\n\n\
                 Press '1' and 'q' to move the left side up and down.\n\n\
                 Press '=' and '[' to move the right side up and down.\n\n\
                 Try to get the ball in the flashing goal!\n\n\
                 Press [SPACE] to begin."
            }
            ModalMessage::Win => "YOU WIN!!\n\nCONGRATULATIONS!!!\n\nPress [SPACE] to play again.",
            ModalMessage::Lose => "Thanks for playing.\n\nPress [SPACE] to play again.",
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub lever: LeverState,
    pub ball: BallState,
    /// Decoys then goals
    pub holes: Vec<Hole>,
    pub target_goal: Hole,
    pub goal_flash_on: bool,
    pub balls_text: String,
    pub current_score_text: String,
    /// Total score, or the miss indicator
    pub total_text: String,
    pub message: Option<ModalMessage>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let score = &state.score;
        let total_text = if score.show_miss {
            MISS_TEXT.to_string()
        } else {
            pad_number(score.total_score, TOTAL_SCORE_DIGITS)
        };

        Self {
            phase: state.phase,
            lever: state.lever,
            ball: state.ball,
            holes: state.holes().all_holes().to_vec(),
            target_goal: *state.target_goal(),
            goal_flash_on: state.goal_flash.on,
            balls_text: pad_number(score.balls_remaining, BALLS_REMAINING_DIGITS),
            current_score_text: pad_number(score.current_score, CURRENT_SCORE_DIGITS),
            total_text,
            message: ModalMessage::for_phase(state.phase),
        }
    }
}
