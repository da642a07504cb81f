//! Whole-round scenarios driven through `tick`

use ice_cold_beer::consts::*;
use ice_cold_beer::settings::Tuning;
use ice_cold_beer::sim::{
    GameEvent, GamePhase, GameState, Hole, HoleRegistry, LeverInput, LeverState, Snapshot,
    TickInput, tick,
};
use ice_cold_beer::ConfigError;
use proptest::prelude::*;

const DT: f32 = 1.0 / 30.0;

fn ack() -> TickInput {
    TickInput {
        acknowledge: true,
        ..Default::default()
    }
}

/// Tick with no input until `phase`, collecting events
fn run_until(state: &mut GameState, phase: GamePhase) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..500 {
        if state.phase == phase {
            return events;
        }
        events.extend(tick(state, &TickInput::default(), DT));
    }
    panic!("never reached {phase:?}, stuck in {:?}", state.phase);
}

/// Level the lever under `hole` and roll the ball onto it
fn drop_into(state: &mut GameState, hole: Hole) -> Vec<GameEvent> {
    assert_eq!(state.phase, GamePhase::PlayerControl);
    let h = hole.center.y + (LEVER_WIDTH / 2.0).trunc() + BALL_RADIUS - 1.0;
    state.lever = LeverState::new(h, h);
    state.ball.pos.x = hole.center.x;
    state.ball.vel_x = 0.0;
    tick(state, &TickInput::default(), DT)
}

fn started_game() -> GameState {
    let mut state = GameState::new(Tuning::default()).unwrap();
    assert_eq!(tick(&mut state, &ack(), DT), vec![GameEvent::IntroAcknowledged]);
    let events = run_until(&mut state, GamePhase::PlayerControl);
    assert_eq!(events, vec![GameEvent::BallPlaced, GameEvent::PlayerControlGained]);
    state
}

#[test]
fn three_decoys_lose_the_game_then_reset() {
    let mut state = started_game();

    // Bank one goal so the total has something to keep
    let goal = state.holes().goal_sequence()[0];
    drop_into(&mut state, goal);
    assert_eq!(state.score.total_score, 100);

    let decoys: Vec<Hole> = state.holes().decoy_holes()[..3].to_vec();

    run_until(&mut state, GamePhase::PlayerControl);
    assert_eq!(
        drop_into(&mut state, decoys[0]),
        vec![GameEvent::LifeLost { balls_remaining: 2 }]
    );
    assert_eq!(Snapshot::capture(&state).total_text, MISS_TEXT);

    run_until(&mut state, GamePhase::PlayerControl);
    assert_eq!(
        drop_into(&mut state, decoys[1]),
        vec![GameEvent::LifeLost { balls_remaining: 1 }]
    );

    run_until(&mut state, GamePhase::PlayerControl);
    assert_eq!(
        drop_into(&mut state, decoys[2]),
        vec![GameEvent::GameLost { total_score: 100 }]
    );
    assert_eq!(state.phase, GamePhase::GameLost);
    assert_eq!(state.score.balls_remaining, 0);
    assert_eq!(state.score.total_score, 100);
    assert!(!state.score.show_miss);

    // Waits on the message
    for _ in 0..30 {
        assert!(tick(&mut state, &TickInput::default(), DT).is_empty());
    }
    assert_eq!(state.phase, GamePhase::GameLost);

    assert_eq!(tick(&mut state, &ack(), DT), vec![GameEvent::Reset]);
    assert_eq!(state.phase, GamePhase::SetupDescending);
    assert_eq!(state.score.balls_remaining, 3);
    assert_eq!(state.score.total_score, 0);
    assert_eq!(state.score.target_goal_index, 0);
    assert_eq!(state.score.current_score, 100);

    // And a new ball comes up
    run_until(&mut state, GamePhase::PlayerControl);
    assert!(state.ball.in_play);
}

#[test]
fn sinking_every_goal_wins() {
    let mut state = started_game();
    let goals: Vec<Hole> = state.holes().goal_sequence().to_vec();

    let mut expected_total = 0;
    for (i, goal) in goals.iter().enumerate() {
        if i > 0 {
            run_until(&mut state, GamePhase::PlayerControl);
        }
        let value = state.score.current_score;
        assert_eq!(value, (i as u32 + 1) * 100);
        expected_total += value;

        let events = drop_into(&mut state, *goal);
        if i + 1 < goals.len() {
            assert_eq!(
                events,
                vec![GameEvent::GoalAdvance {
                    goal_index: i,
                    points: value
                }]
            );
            assert_eq!(state.score.target_goal_index, i + 1);
        } else {
            assert_eq!(
                events,
                vec![GameEvent::GameWon {
                    total_score: expected_total
                }]
            );
        }
    }

    assert_eq!(state.phase, GamePhase::GameWon);
    assert_eq!(state.score.total_score, 5500);
    assert_eq!(state.score.balls_remaining, 3);

    tick(&mut state, &ack(), DT);
    assert_eq!(state.phase, GamePhase::SetupDescending);
    assert_eq!(state.score.total_score, 0);
}

#[test]
fn score_decays_every_three_seconds_of_play() {
    let mut state = started_game();
    let mut values = Vec::new();
    // Ten seconds with the lever level and the ball against the right wall
    for _ in 0..300 {
        for event in tick(&mut state, &TickInput::default(), DT) {
            if let GameEvent::ScoreDecayed { current_score } = event {
                values.push(current_score);
            }
        }
    }
    assert_eq!(values, vec![90, 80, 70]);
}

#[test]
fn custom_layout_without_goals_fails_fast() {
    let result = HoleRegistry::new(vec![Hole::new(300.0, 300.0, 11.0)], Vec::new());
    assert!(matches!(result, Err(ConfigError::EmptyGoalSequence)));
}

#[test]
fn custom_single_goal_layout_is_winnable() {
    let goal = Hole::new(340.0, 400.0, 8.0);
    let holes = HoleRegistry::new(Vec::new(), vec![goal]).unwrap();
    let mut state = GameState::with_holes(holes, Tuning::default()).unwrap();
    tick(&mut state, &ack(), DT);
    run_until(&mut state, GamePhase::PlayerControl);

    assert_eq!(
        drop_into(&mut state, goal),
        vec![GameEvent::GameWon { total_score: 100 }]
    );
}

#[test]
fn huge_goal_values_saturate_the_total() {
    let goals = vec![
        Hole::new(200.0, 400.0, 8.0),
        Hole::new(300.0, 400.0, 8.0),
        Hole::new(400.0, 400.0, 8.0),
    ];
    let holes = HoleRegistry::new(Vec::new(), goals.clone()).unwrap();
    let tuning = Tuning {
        goal_score_step: u32::MAX / 2 + 1,
        ..Default::default()
    };
    let mut state = GameState::with_holes(holes, tuning).unwrap();
    tick(&mut state, &ack(), DT);
    run_until(&mut state, GamePhase::PlayerControl);

    drop_into(&mut state, goals[0]);
    assert_eq!(state.score.total_score, u32::MAX / 2 + 1);
    assert_eq!(state.score.current_score, u32::MAX);

    run_until(&mut state, GamePhase::PlayerControl);
    assert_eq!(
        drop_into(&mut state, goals[1]),
        vec![GameEvent::GoalAdvance {
            goal_index: 1,
            points: u32::MAX
        }]
    );
    assert_eq!(state.score.total_score, u32::MAX);
}

#[test]
fn tightest_gap_still_lets_the_player_move() {
    let tuning = Tuning {
        max_lever_gap: 15.0,
        ..Default::default()
    };
    let mut state = GameState::new(tuning).unwrap();
    tick(&mut state, &ack(), DT);
    run_until(&mut state, GamePhase::PlayerControl);
    let start = state.lever;
    assert_eq!(start.gap(), 15.0);

    let raise_right = TickInput {
        lever: LeverInput {
            raise_right: true,
            ..Default::default()
        },
        acknowledge: false,
    };
    tick(&mut state, &raise_right, DT);
    assert_ne!(state.lever, start);
    assert_eq!(state.lever.gap(), 13.0);
}

#[test]
fn unplayable_tuning_is_rejected_up_front() {
    let tuning = Tuning {
        max_lever_gap: 10.0,
        ..Default::default()
    };
    assert!(matches!(
        GameState::new(tuning),
        Err(ConfigError::InvalidTuning { field: "max_lever_gap", .. })
    ));
}

fn lever_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(raise_left, lower_left, raise_right, lower_right)| TickInput {
            lever: LeverInput {
                raise_left,
                lower_left,
                raise_right,
                lower_right,
            },
            acknowledge: false,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn play_keeps_lever_and_ball_in_bounds(inputs in prop::collection::vec(lever_input(), 1..400)) {
        let mut state = started_game();
        let tuning = state.tuning.clone();

        for input in &inputs {
            tick(&mut state, input, DT);

            if state.phase == GamePhase::PlayerControl {
                let lever = state.lever;
                prop_assert!((TOP_LIMIT..=BOTTOM_LIMIT).contains(&lever.left_nut_height));
                prop_assert!((TOP_LIMIT..=BOTTOM_LIMIT).contains(&lever.right_nut_height));
                prop_assert!(lever.gap() <= tuning.max_lever_gap);
            }
            if state.ball.in_play {
                prop_assert!(state.ball.pos.x >= LEFT_LIMIT + BALL_RADIUS);
                prop_assert!(state.ball.pos.x <= RIGHT_LIMIT - BALL_RADIUS);
            }
            if state.phase.is_modal() {
                // Game over: reset and keep going
                tick(&mut state, &ack(), DT);
            }
        }
    }
}
