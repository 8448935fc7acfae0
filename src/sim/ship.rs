//! The player's ship
//!
//! Motion is fully inertial: thrust accumulates into velocity and nothing
//! ever damps or caps it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity};
use crate::consts::*;
use crate::heading_to_vec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Frames of invulnerability left; damage is ignored while non-zero
    pub invulnerable: u32,
    /// Keep thrusting every frame without input
    pub inertia: bool,
    /// Magnitude of the last thrust applied
    pub speed: f32,
}

impl Ship {
    /// Fresh ship at the center of the screen, fully invulnerable
    pub fn spawn(screen: Vec2) -> Self {
        Self {
            body: Body::new(screen / 2.0, SHIP_RADIUS, SHIP_SIZE),
            invulnerable: SHIP_INVULNERABLE_FRAMES,
            inertia: false,
            speed: 0.0,
        }
    }

    pub fn turn_left(&mut self) {
        self.body.rotate(SHIP_TURN_AMOUNT);
    }

    pub fn turn_right(&mut self) {
        self.body.rotate(-SHIP_TURN_AMOUNT);
    }

    /// Accelerate along the current heading
    pub fn thrust(&mut self) {
        self.speed = SHIP_THRUST;
        self.body.vel += heading_to_vec(self.body.heading) * self.speed;
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0
    }
}

impl Entity for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn advance(&mut self) {
        self.invulnerable = self.invulnerable.saturating_sub(1);
        self.body.pos += self.body.vel;
    }
}
