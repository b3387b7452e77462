//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the `DrawSurface` trait

pub mod collision;
pub mod motion;
pub mod round;
pub mod spawn;
pub mod species;
pub mod state;
pub mod tick;

pub use collision::{Circle, is_colliding};
pub use motion::{move_entity, move_player};
pub use round::{reset, setup_round, start};
pub use spawn::spawn;
pub use species::{Behavior, Species, SpeciesError, SpeciesKey, lookup};
pub use state::{
    Entity, GameEvent, GameState, Playfield, Player, RoundPhase, WorldSnapshot,
};
pub use tick::{TickInput, TickStatus, tick, toggle_pause};
