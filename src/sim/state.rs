//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::species::{Species, SpeciesKey};
use crate::consts::*;

/// Round progression state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Entities are placed but the loop has not been started
    NotStarted,
    /// Playing the given round (1-based)
    InRound(u32),
    /// Final round cleared
    Won,
    /// Caught by a predator
    Lost,
}

impl RoundPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

/// Terminal notifications for the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Won { score: u64, round: u32 },
    Lost { score: u64, round: u32 },
}

impl GameEvent {
    pub fn score(&self) -> u64 {
        match *self {
            GameEvent::Won { score, .. } | GameEvent::Lost { score, .. } => score,
        }
    }

    /// Human-readable outcome line
    pub fn message(&self) -> String {
        match self {
            GameEvent::Won { score, .. } => format!("You won the game! Final score: {score}"),
            GameEvent::Lost { score, .. } => format!("Game over! Final score: {score}"),
        }
    }
}

/// Rectangular play area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a circle lies fully inside the playfield (edges inclusive)
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }
}

/// A live prey or predator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub species: SpeciesKey,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Direction of travel; ±1 per axis for walkers, unit length for pursuers
    pub heading: Vec2,
}

impl Entity {
    pub fn species(&self) -> &'static Species {
        self.species.descriptor()
    }
}

/// The player-controlled creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub species: SpeciesKey,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            species: SpeciesKey::Insect,
            pos,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
        }
    }
}

/// Read-only copy of the world, taken between ticks
#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub phase: RoundPhase,
    pub round: u32,
    pub score: u64,
    pub best_score: u64,
    pub running: bool,
    pub paused: bool,
    pub theme_index: usize,
    pub playfield: Playfield,
    pub player: Player,
    pub prey: Vec<Entity>,
    pub predators: Vec<Entity>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub playfield: Playfield,
    pub phase: RoundPhase,
    /// Current round (1-based, never above FINAL_ROUND)
    pub round: u32,
    pub score: u64,
    /// Highest final score this process has seen (not persisted)
    pub best_score: u64,
    /// Loop is actively ticking
    pub running: bool,
    /// Loop is suspended while running
    pub paused: bool,
    /// Background index for the current round
    pub theme_index: usize,
    pub player: Player,
    pub prey: Vec<Entity>,
    pub predators: Vec<Entity>,
    /// Ticks executed since the last start
    pub frame: u64,
    /// Terminal events not yet collected by the host
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session with round 1 populated but not running
    pub fn new(seed: u64, playfield: Playfield) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            phase: RoundPhase::NotStarted,
            round: 1,
            score: 0,
            best_score: 0,
            running: false,
            paused: false,
            theme_index: 0,
            player: Player::new(playfield.center()),
            prey: Vec::new(),
            predators: Vec::new(),
            frame: 0,
            events: Vec::new(),
        };

        super::round::setup_round(&mut state, 1);

        state
    }

    /// Whether the host should keep scheduling frames
    pub fn is_ticking(&self) -> bool {
        self.running && !self.paused
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending terminal events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame,
            phase: self.phase,
            round: self.round,
            score: self.score,
            best_score: self.best_score,
            running: self.running,
            paused: self.paused,
            theme_index: self.theme_index,
            playfield: self.playfield,
            player: self.player.clone(),
            prey: self.prey.clone(),
            predators: self.predators.clone(),
        }
    }
}
