//! Circle-overlap collision

use glam::Vec2;

use super::state::{Entity, Player};

/// Anything with a circular footprint
pub trait Circle {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}

impl Circle for Entity {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Circle for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Strict overlap: touching circles do not collide
#[inline]
pub fn is_colliding(a: &impl Circle, b: &impl Circle) -> bool {
    a.center().distance(b.center()) < a.radius() + b.radius()
}
