//! Projectiles fired by the ship

use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity};
use super::ship::Ship;
use crate::consts::*;
use crate::heading_to_vec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Frames left before the shot expires
    pub life: u32,
}

impl Projectile {
    /// Fire from the ship's current position and heading.
    ///
    /// The ship's velocity at this instant carries over into the shot.
    pub fn fire(ship: &Ship) -> Self {
        let mut body = Body::new(ship.body.pos, PROJECTILE_RADIUS, PROJECTILE_SIZE);
        body.heading = ship.body.heading;
        body.vel = heading_to_vec(body.heading) * PROJECTILE_SPEED + ship.body.vel;
        Self {
            body,
            life: PROJECTILE_LIFE,
        }
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn advance(&mut self) {
        self.body.pos += self.body.vel;
        self.life = self.life.saturating_sub(1);
        if self.life == 0 {
            self.body.alive = false;
        }
    }
}
