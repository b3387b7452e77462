//! Idle/demo mode - a simple AI that plays the game
//!
//! Flees the nearest predator when it gets close, otherwise heads for the
//! nearest prey. Good enough for headless smoke runs, not for winning.

use glam::Vec2;

use crate::sim::{Entity, GameState, TickInput};

/// Extra distance (beyond touching) at which a predator triggers fleeing
pub const DANGER_MARGIN: f32 = 60.0;

/// Dead zone so the player does not jitter around its target
const AXIS_DEAD_ZONE: f32 = 1.5;

/// Pick the direction keys for the next tick
pub fn steer(state: &GameState) -> TickInput {
    let player = &state.player;

    let threat = nearest(player.pos, &state.predators)
        .filter(|p| p.pos.distance(player.pos) < p.radius + player.radius + DANGER_MARGIN);

    let desired = if let Some(predator) = threat {
        let away = player.pos - predator.pos;
        // Same spot: any direction will do
        if away.length_squared() == 0.0 { Vec2::X } else { away }
    } else if let Some(prey) = nearest(player.pos, &state.prey) {
        prey.pos - player.pos
    } else {
        Vec2::ZERO
    };

    TickInput {
        up: desired.y < -AXIS_DEAD_ZONE,
        down: desired.y > AXIS_DEAD_ZONE,
        left: desired.x < -AXIS_DEAD_ZONE,
        right: desired.x > AXIS_DEAD_ZONE,
    }
}

fn nearest(from: Vec2, entities: &[Entity]) -> Option<&Entity> {
    entities.iter().min_by(|a, b| {
        a.pos
            .distance_squared(from)
            .partial_cmp(&b.pos.distance_squared(from))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
