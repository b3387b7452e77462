//! Entity spawning

use glam::Vec2;
use rand::Rng;

use super::species::SpeciesKey;
use super::state::{Entity, Playfield};

/// Create an entity of `species` at a random spot with a random diagonal heading
pub fn spawn<R: Rng + ?Sized>(species: SpeciesKey, playfield: &Playfield, rng: &mut R) -> Entity {
    let data = species.descriptor();
    let pos = Vec2::new(
        rng.random_range(0.0..playfield.width),
        rng.random_range(0.0..playfield.height),
    );
    let heading = Vec2::new(random_sign(rng), random_sign(rng));

    Entity {
        species,
        pos,
        radius: data.radius,
        speed: data.speed,
        heading,
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}
