//! Proximity tests between entities
//!
//! Hits are decided on an axis-aligned window rather than true circle
//! overlap: each radius is padded by a fixed margin and both axis distances
//! must fall inside the padded sum.

use glam::Vec2;

use super::entity::Body;
use crate::consts::{PROJECTILE_HIT_MARGIN, SHIP_HIT_MARGIN};

/// True if `a` and `b` are within `(ra + margin) + (rb + margin)` on both axes
#[inline]
pub fn within_reach(a: Vec2, ra: f32, b: Vec2, rb: f32, margin: f32) -> bool {
    let reach = (ra + margin) + (rb + margin);
    let delta = (a - b).abs();
    delta.x < reach && delta.y < reach
}

/// Projectile/asteroid test (dead bodies never collide)
pub fn projectile_hits_asteroid(projectile: &Body, asteroid: &Body) -> bool {
    projectile.alive
        && asteroid.alive
        && within_reach(
            projectile.pos,
            projectile.radius,
            asteroid.pos,
            asteroid.radius,
            PROJECTILE_HIT_MARGIN,
        )
}

/// Ship/asteroid test, before invulnerability is considered
pub fn ship_hits_asteroid(ship: &Body, asteroid: &Body) -> bool {
    ship.alive
        && asteroid.alive
        && within_reach(ship.pos, ship.radius, asteroid.pos, asteroid.radius, SHIP_HIT_MARGIN)
}
