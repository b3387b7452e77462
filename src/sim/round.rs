//! Round progression and session lifecycle
//!
//! NotStarted -> InRound(1) -> ... -> InRound(FINAL_ROUND) -> Won
//! Any InRound(n) -> Lost on a predator catch.

use super::spawn::spawn;
use super::species::SpeciesKey;
use super::state::{GameEvent, GameState, Player, RoundPhase};
use crate::consts::*;
use crate::theme;

/// Species every round fills the prey set with
pub const PREY_SPECIES: SpeciesKey = SpeciesKey::Insect;
/// Species every round fills the predator set with
pub const PREDATOR_SPECIES: SpeciesKey = SpeciesKey::Frog;

/// Repopulate the playfield for round `n`: ten prey, `n` predators
pub fn setup_round(state: &mut GameState, n: u32) {
    debug_assert!((1..=FINAL_ROUND).contains(&n), "round {n} out of range");

    state.prey.clear();
    state.predators.clear();

    for _ in 0..PREY_PER_ROUND {
        let prey = spawn(PREY_SPECIES, &state.playfield, &mut state.rng);
        state.prey.push(prey);
    }
    for _ in 0..n {
        let predator = spawn(PREDATOR_SPECIES, &state.playfield, &mut state.rng);
        state.predators.push(predator);
    }

    state.round = n;
    state.theme_index = theme::index_for_round(n);
    log::debug!(
        "Round {} set up: {} prey, {} predators",
        n,
        state.prey.len(),
        state.predators.len()
    );
}

/// Begin a fresh session at round 1 with the loop running
pub fn start(state: &mut GameState) {
    state.score = 0;
    state.frame = 0;
    state.running = true;
    state.paused = false;
    state.player = Player::new(state.playfield.center());
    setup_round(state, 1);
    state.phase = RoundPhase::InRound(1);
    log::info!("Game started (seed {})", state.seed);
}

/// Stop the loop and leave round 1 populated but idle
pub fn reset(state: &mut GameState) {
    state.score = 0;
    state.frame = 0;
    state.running = false;
    state.paused = false;
    state.player = Player::new(state.playfield.center());
    setup_round(state, 1);
    state.phase = RoundPhase::NotStarted;
    log::info!("Game reset");
}

/// Called once the prey set is empty: next round, or victory after the last
pub fn advance(state: &mut GameState) {
    debug_assert!(state.prey.is_empty());

    if state.round >= FINAL_ROUND {
        let event = GameEvent::Won {
            score: state.score,
            round: state.round,
        };
        finish(state, RoundPhase::Won, event);
        return;
    }

    let next = state.round + 1;
    setup_round(state, next);
    state.phase = RoundPhase::InRound(next);
    log::info!("Round {} cleared, entering round {}", next - 1, next);
}

/// Player was caught by a predator
pub fn lose(state: &mut GameState) {
    let event = GameEvent::Lost {
        score: state.score,
        round: state.round,
    };
    finish(state, RoundPhase::Lost, event);
}

fn finish(state: &mut GameState, phase: RoundPhase, event: GameEvent) {
    state.phase = phase;
    state.running = false;
    state.best_score = state.best_score.max(state.score);
    log::info!("{} (round {})", event.message(), state.round);
    state.push_event(event);
}
