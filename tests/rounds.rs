//! Round progression scenarios driven through the public tick API

use food_chain::consts::{FINAL_ROUND, PREY_PER_ROUND, SCORE_PER_PREY};
use food_chain::platform::autopilot;
use food_chain::renderer::{NullSurface, RecordingSurface};
use food_chain::sim::{
    GameEvent, GameState, Playfield, RoundPhase, TickInput, TickStatus, round, tick,
};
use glam::Vec2;

const PREY_PARK: Vec2 = Vec2::new(60.0, 60.0);
const PREDATOR_PARK: Vec2 = Vec2::new(740.0, 540.0);

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed, Playfield::default());
    round::start(&mut state);
    state
}

/// Move everything out of the player's reach
fn park(state: &mut GameState) {
    for prey in &mut state.prey {
        prey.pos = PREY_PARK;
    }
    for predator in &mut state.predators {
        predator.pos = PREDATOR_PARK;
    }
}

/// Tick once with exactly one prey sitting on the player
fn eat_one(state: &mut GameState) -> TickStatus {
    park(state);
    state.prey[0].pos = state.player.pos;
    tick(state, &TickInput::default(), &mut NullSurface)
}

#[test]
fn start_populates_first_round() {
    let state = started(1);
    assert_eq!(state.phase, RoundPhase::InRound(1));
    assert_eq!(state.round, 1);
    assert_eq!(state.prey.len(), PREY_PER_ROUND);
    assert_eq!(state.predators.len(), 1);
    assert_eq!(state.score, 0);
    assert!(state.running);
}

#[test]
fn clearing_round_one_advances_to_round_two() {
    let mut state = started(2);

    for eaten in 1..=PREY_PER_ROUND {
        assert_eq!(eat_one(&mut state), TickStatus::Continue);
        assert_eq!(state.score, eaten as u64 * SCORE_PER_PREY);
        if eaten < PREY_PER_ROUND {
            assert_eq!(state.prey.len(), PREY_PER_ROUND - eaten);
            assert_eq!(state.round, 1);
        }
    }

    assert_eq!(state.phase, RoundPhase::InRound(2));
    assert_eq!(state.round, 2);
    assert_eq!(state.prey.len(), PREY_PER_ROUND);
    assert_eq!(state.predators.len(), 2);
    assert_eq!(state.score, 50);
    assert_eq!(state.theme_index, 1);
}

#[test]
fn partial_prey_set_advances_after_that_many_catches() {
    let mut state = started(3);
    state.prey.truncate(3);

    for _ in 0..3 {
        eat_one(&mut state);
    }

    assert_eq!(state.round, 2);
    assert_eq!(state.prey.len(), PREY_PER_ROUND);
    assert_eq!(state.score, 15);
}

#[test]
fn clearing_final_round_wins() {
    let mut state = started(4);
    round::setup_round(&mut state, FINAL_ROUND);
    state.phase = RoundPhase::InRound(FINAL_ROUND);
    state.score = 100;

    let mut last = TickStatus::Continue;
    for _ in 0..PREY_PER_ROUND {
        last = eat_one(&mut state);
    }

    assert_eq!(last, TickStatus::Stopped);
    assert_eq!(state.phase, RoundPhase::Won);
    assert_eq!(state.round, FINAL_ROUND);
    assert_eq!(state.score, 150);
    assert!(!state.running);
    assert!(!state.is_ticking());
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::Won {
            score: 150,
            round: FINAL_ROUND
        }]
    );

    // The loop stays stopped
    assert_eq!(
        tick(&mut state, &TickInput::default(), &mut NullSurface),
        TickStatus::Idle
    );
    assert_eq!(state.round, FINAL_ROUND);
}

#[test]
fn full_run_through_all_rounds() {
    let mut state = started(5);
    let mut ticks = 0;
    while state.phase != RoundPhase::Won {
        eat_one(&mut state);
        ticks += 1;
        assert!(state.round <= FINAL_ROUND);
    }
    assert_eq!(ticks, PREY_PER_ROUND * FINAL_ROUND as usize);
    assert_eq!(state.score, 300);
    assert_eq!(state.best_score, 300);
}

#[test]
fn adjacent_predator_loses_on_first_tick() {
    let mut state = started(6);
    state.score = 20;
    park(&mut state);
    state.predators[0].pos = state.player.pos + Vec2::new(0.0, 25.0);

    let mut surface = RecordingSurface::default();
    let status = tick(&mut state, &TickInput::default(), &mut surface);

    assert_eq!(status, TickStatus::Stopped);
    assert_eq!(state.phase, RoundPhase::Lost);
    assert!(!state.running);
    assert_eq!(state.score, 20);
    assert_eq!(state.prey.len(), PREY_PER_ROUND);
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::Lost {
            score: 20,
            round: 1
        }]
    );
    assert!(surface.texts().any(|t| t == "Score: 20"));
}

#[test]
fn losing_ignores_remaining_prey_and_predators() {
    let mut state = started(7);
    round::setup_round(&mut state, 4);
    state.phase = RoundPhase::InRound(4);
    park(&mut state);
    state.predators[2].pos = state.player.pos;

    assert_eq!(
        tick(&mut state, &TickInput::default(), &mut NullSurface),
        TickStatus::Stopped
    );
    assert_eq!(state.phase, RoundPhase::Lost);
    assert_eq!(state.round, 4);
    assert_eq!(state.predators.len(), 4);
}

#[test]
fn reset_after_loss_is_idle_until_started() {
    let mut state = started(8);
    park(&mut state);
    state.predators[0].pos = state.player.pos;
    tick(&mut state, &TickInput::default(), &mut NullSurface);
    assert_eq!(state.phase, RoundPhase::Lost);

    round::reset(&mut state);
    assert_eq!(state.phase, RoundPhase::NotStarted);
    assert_eq!(
        tick(&mut state, &TickInput::default(), &mut NullSurface),
        TickStatus::Idle
    );

    round::start(&mut state);
    assert!(state.is_ticking());
    assert_eq!(state.score, 0);
}

#[test]
fn score_is_monotonic_in_autopilot_games() {
    for seed in 0..8 {
        let mut state = started(seed);
        let mut last_score = 0;
        for _ in 0..3_000 {
            let input = autopilot::steer(&state);
            let status = tick(&mut state, &input, &mut NullSurface);

            assert!(state.score >= last_score);
            assert_eq!((state.score - last_score) % SCORE_PER_PREY, 0);
            assert!(state.round >= 1 && state.round <= FINAL_ROUND);
            assert!(state.playfield.contains_circle(state.player.pos, state.player.radius));
            last_score = state.score;

            if status == TickStatus::Stopped {
                assert!(state.phase.is_terminal());
                let frozen = state.score;
                tick(&mut state, &input, &mut NullSurface);
                assert_eq!(state.score, frozen);
                break;
            }
        }
    }
}
