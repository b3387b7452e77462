//! Per-tick movement rules
//!
//! The player moves from held direction keys, walkers bounce along a fixed
//! diagonal, pursuers re-aim at the player every tick. Which rule an entity
//! follows comes from its species' [`Behavior`] tag.

use glam::Vec2;

use super::species::Behavior;
use super::state::{Entity, Playfield, Player};
use super::tick::TickInput;
use crate::heading_toward;

/// Move the player one step per held direction, refusing any step that
/// would push its circle past a wall. Axes are handled independently.
pub fn move_player(player: &mut Player, input: &TickInput, playfield: &Playfield) {
    let steps = [
        (input.up, Vec2::new(0.0, -player.speed)),
        (input.down, Vec2::new(0.0, player.speed)),
        (input.left, Vec2::new(-player.speed, 0.0)),
        (input.right, Vec2::new(player.speed, 0.0)),
    ];

    for (held, step) in steps {
        if held && playfield.contains_circle(player.pos + step, player.radius) {
            player.pos += step;
        }
    }
}

/// Advance an entity by its species' movement rule
pub fn move_entity(entity: &mut Entity, target: Vec2, playfield: &Playfield) {
    match entity.species().behavior {
        Behavior::RandomWalk => {}
        Behavior::Pursuit => entity.heading = heading_toward(entity.pos, target),
    }

    entity.pos += entity.heading * entity.speed;
    bounce_off_walls(entity, playfield);
}

/// Point the heading back inside on any axis where the circle crosses a wall
///
/// The heading is set toward the interior rather than flipped, so an entity
/// that starts straddling a wall walks out of it instead of jittering.
fn bounce_off_walls(entity: &mut Entity, playfield: &Playfield) {
    let Entity {
        pos,
        radius,
        heading,
        ..
    } = entity;

    if pos.x - *radius < 0.0 {
        heading.x = heading.x.abs();
    } else if pos.x + *radius > playfield.width {
        heading.x = -heading.x.abs();
    }

    if pos.y - *radius < 0.0 {
        heading.y = heading.y.abs();
    } else if pos.y + *radius > playfield.height {
        heading.y = -heading.y.abs();
    }
}
