//! Fixed timestep simulation tick
//!
//! Order within a tick: goal flash, lever, ball, hole collision, score
//! decay. Modal phases skip all of it and only watch for acknowledgment.

use serde::{Deserialize, Serialize};

use super::collision::check_collision;
use super::holes::HoleKind;
use super::lever::{LeverInput, SetupProgress};
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub lever: LeverInput,
    /// Dismiss the intro/win/lose message
    pub acknowledge: bool,
}

/// Advance the game state by one fixed timestep
///
/// Returns the events produced, in the order they happened.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_modal() {
        if input.acknowledge {
            acknowledge(state, &mut events);
        }
        return events;
    }

    state.time_ticks += 1;
    state.goal_flash.advance(dt, state.tuning.goal_flash_secs);

    update_lever(state, &input.lever, &mut events);
    state.ball.step(&state.lever, &state.tuning);

    if state.ball.in_play {
        let hit = check_collision(
            state.ball.pos,
            state.ball.radius,
            state.holes().all_holes(),
            state.tuning.coverage_threshold,
        );
        if let Some(index) = hit {
            resolve_hole(state, index, &mut events);
        }
    }

    if state.phase == GamePhase::PlayerControl {
        decay_score(state, dt, &mut events);
    }

    events
}

fn acknowledge(state: &mut GameState, events: &mut Vec<GameEvent>) {
    match state.phase {
        GamePhase::Intro => {
            state.phase = GamePhase::SetupDescending;
            events.push(GameEvent::IntroAcknowledged);
        }
        GamePhase::GameWon | GamePhase::GameLost => {
            state.reset();
            events.push(GameEvent::Reset);
        }
        _ => {}
    }
    log::debug!("Acknowledged, phase now {:?}", state.phase);
}

fn update_lever(state: &mut GameState, input: &LeverInput, events: &mut Vec<GameEvent>) {
    let speed = state.tuning.lever_setup_speed;
    match state.phase {
        GamePhase::SetupDescending => {
            if state.lever.descend_to_setup(speed) == SetupProgress::Arrived {
                state.ball.place(&state.lever);
                state.score.show_miss = false;
                state.phase = GamePhase::SetupAscending;
                events.push(GameEvent::BallPlaced);
            }
        }
        GamePhase::SetupAscending => {
            if state.lever.ascend_to_start(speed) == SetupProgress::Arrived {
                state.phase = GamePhase::PlayerControl;
                events.push(GameEvent::PlayerControlGained);
            }
        }
        GamePhase::PlayerControl => {
            state.lever.apply_input(input, &state.tuning);
        }
        GamePhase::Intro | GamePhase::GameWon | GamePhase::GameLost => {}
    }
}

/// React to the ball dropping into hole `index` of `all_holes()`
///
/// Only the target goal scores. Any other hole, including a goal that is
/// already behind the player or still ahead, swallows the ball.
fn resolve_hole(state: &mut GameState, index: usize, events: &mut Vec<GameEvent>) {
    state.ball.drop_out();
    state.phase = GamePhase::SetupDescending;

    let target = state.score.target_goal_index;
    let kind = state.holes().kind_of(index);
    match kind {
        HoleKind::Goal(goal) if goal == target => {
            let points = state.score.current_score;
            state.score.total_score = state.score.total_score.saturating_add(points);

            if state.holes().is_last_goal(goal) {
                state.phase = GamePhase::GameWon;
                log::info!("Final goal sunk, total {}", state.score.total_score);
                events.push(GameEvent::GameWon {
                    total_score: state.score.total_score,
                });
            } else {
                let next = goal + 1;
                state.score.target_goal_index = next;
                state.score.current_score = state.tuning.goal_value(next);
                state.score.current_score_time = 0.0;
                log::info!("Goal {} sunk for {} points", goal + 1, points);
                events.push(GameEvent::GoalAdvance {
                    goal_index: goal,
                    points,
                });
            }
        }
        _ => {
            state.score.balls_remaining = state.score.balls_remaining.saturating_sub(1);
            if state.score.balls_remaining == 0 {
                state.score.show_miss = false;
                state.phase = GamePhase::GameLost;
                log::info!("Out of balls, total {}", state.score.total_score);
                events.push(GameEvent::GameLost {
                    total_score: state.score.total_score,
                });
            } else {
                state.score.show_miss = true;
                log::info!("Ball lost, {} remaining", state.score.balls_remaining);
                events.push(GameEvent::LifeLost {
                    balls_remaining: state.score.balls_remaining,
                });
            }
        }
    }
}

fn decay_score(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let score = &mut state.score;
    score.current_score_time += dt;
    if score.current_score_time >= state.tuning.score_decay_secs {
        score.current_score = score.current_score.saturating_sub(state.tuning.score_decay_step);
        score.current_score_time = 0.0;
        events.push(GameEvent::ScoreDecayed {
            current_score: score.current_score,
        });
    }
}
