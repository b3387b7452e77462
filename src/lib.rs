//! Food Chain - A round-based predator/prey arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (species, motion, collisions, rounds)
//! - `renderer`: Draw surface abstraction and the browser canvas backend
//! - `platform`: Browser/native platform abstraction (input)
//! - `settings`: Playfield and presentation preferences
//! - `theme`: Per-round background table

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod theme;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Prey spawned at the start of every round
    pub const PREY_PER_ROUND: usize = 10;
    /// Last round; clearing it wins the game
    pub const FINAL_ROUND: u32 = 6;
    /// Score awarded per prey consumed
    pub const SCORE_PER_PREY: u64 = 5;

    /// HUD text anchors (top-left corner)
    pub const HUD_SCORE_POS: (f32, f32) = (10.0, 20.0);
    pub const HUD_ROUND_POS: (f32, f32) = (10.0, 50.0);
    /// Gap between an entity's top edge and its label baseline
    pub const LABEL_OFFSET: f32 = 10.0;
}

/// Unit vector pointing from `from` toward `to`
///
/// Coincident points yield the +x axis (atan2(0, 0) == 0).
#[inline]
pub fn heading_toward(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    Vec2::from_angle(delta.y.atan2(delta.x))
}
