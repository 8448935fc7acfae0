//! Shared movable-body model
//!
//! Every ship, projectile and asteroid carries a `Body`. The `Entity` trait
//! is the capability set the game loop drives them through.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, wrap_position};
use crate::normalize_degrees;

/// Position, motion and liveness common to all entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Per-frame displacement
    pub vel: Vec2,
    /// Degrees, normalized to [0, 360)
    pub heading: f32,
    /// Collision radius
    pub radius: f32,
    /// Sprite extent used for wrap
    pub size: Vec2,
    pub alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, size: (f32, f32)) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            radius,
            size: Vec2::new(size.0, size.1),
            alive: true,
        }
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.heading = normalize_degrees(self.heading + degrees);
    }
}

pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Integrate one frame of motion
    fn advance(&mut self);

    fn is_alive(&self) -> bool {
        self.body().alive
    }

    fn bounds(&self) -> Bounds {
        let body = self.body();
        Bounds::around(body.pos, body.size)
    }

    fn wrap(&mut self, screen: Vec2) {
        let body = self.body_mut();
        body.pos = wrap_position(body.pos, body.size, screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_normalizes() {
        let mut body = Body::new(Vec2::ZERO, 1.0, (1.0, 1.0));
        body.rotate(-3.0);
        assert!((body.heading - 357.0).abs() < 1e-4);
        body.rotate(6.0);
        assert!((body.heading - 3.0).abs() < 1e-4);
    }
}
