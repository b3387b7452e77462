//! Per-frame simulation tick
//!
//! One call draws and advances the world by exactly one frame. The host is
//! responsible for calling it once per display refresh while
//! [`GameState::is_ticking`] holds.

use super::collision::is_colliding;
use super::motion::{move_entity, move_player};
use super::round;
use super::state::{GameState, RoundPhase};
use crate::consts::*;
use crate::renderer::{Color, DrawSurface, TextStyle, draw_creature};

/// Direction keys held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Schedule the next frame
    Continue,
    /// The session ended during this tick; stop scheduling
    Stopped,
    /// Not running or paused; nothing happened
    Idle,
}

/// Advance the game by one frame, drawing it onto `surface`
pub fn tick(state: &mut GameState, input: &TickInput, surface: &mut impl DrawSurface) -> TickStatus {
    if !state.is_ticking() {
        return TickStatus::Idle;
    }

    state.frame += 1;
    surface.clear();

    let player = &mut state.player;
    draw_creature(surface, player.pos, player.radius, Color::Player, player.species);
    move_player(player, input, &state.playfield);

    // Prey: draw, move, eat. Caught prey are dropped in the same pass.
    let mut caught = 0u64;
    state.prey.retain_mut(|prey| {
        draw_creature(surface, prey.pos, prey.radius, Color::Prey, prey.species);
        move_entity(prey, state.player.pos, &state.playfield);
        let hit = is_colliding(&state.player, &*prey);
        caught += u64::from(hit);
        !hit
    });
    if caught > 0 {
        state.score += caught * SCORE_PER_PREY;
        log::debug!(
            "Caught {} prey, score {} ({} left)",
            caught,
            state.score,
            state.prey.len()
        );
    }

    // Predators: the first catch ends the game
    let mut caught_by = None;
    for predator in &mut state.predators {
        draw_creature(surface, predator.pos, predator.radius, Color::Predator, predator.species);
        move_entity(predator, state.player.pos, &state.playfield);
        if is_colliding(&state.player, &*predator) {
            caught_by = Some(predator.species);
            break;
        }
    }

    draw_hud(state, surface);

    if let Some(species) = caught_by {
        log::debug!("Player caught by a {}", species.descriptor().name);
        round::lose(state);
        return TickStatus::Stopped;
    }

    if state.prey.is_empty() {
        round::advance(state);
        if state.phase == RoundPhase::Won {
            return TickStatus::Stopped;
        }
    }

    TickStatus::Continue
}

/// Flip the paused flag of a running session; returns the new paused state
///
/// Resuming does not tick by itself: the host must schedule a frame again.
pub fn toggle_pause(state: &mut GameState) -> bool {
    if !state.running {
        log::debug!("Pause ignored: game not running");
        return state.paused;
    }

    state.paused = !state.paused;
    if state.paused {
        log::info!("Game paused");
    } else {
        log::info!("Game resumed");
    }
    state.paused
}

fn draw_hud(state: &GameState, surface: &mut impl DrawSurface) {
    let (x, y) = HUD_SCORE_POS;
    surface.draw_text(&format!("Score: {}", state.score), glam::Vec2::new(x, y), TextStyle::Hud);
    let (x, y) = HUD_ROUND_POS;
    surface.draw_text(&format!("Round: {}", state.round), glam::Vec2::new(x, y), TextStyle::Hud);
}
