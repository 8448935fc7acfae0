//! Screen-wrap geometry
//!
//! Entities leaving one edge of the screen reappear at the opposite edge.
//! The jump is discontinuous: the entity center is placed half a sprite
//! inside the far edge, whatever direction it was travelling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned sprite box around an entity center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    pub fn around(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            bottom: center.y - half.y,
            top: center.y + half.y,
        }
    }

    /// True if the box lies entirely on screen
    pub fn inside(&self, screen: Vec2) -> bool {
        self.left >= 0.0 && self.right <= screen.x && self.bottom >= 0.0 && self.top <= screen.y
    }
}

/// Wrap a center position given its sprite size.
///
/// Edges are measured once before any correction, so a box crossing a corner
/// is corrected on both axes in the same call.
pub fn wrap_position(center: Vec2, size: Vec2, screen: Vec2) -> Vec2 {
    let b = Bounds::around(center, size);
    let half = size / 2.0;
    let mut pos = center;

    if b.right > screen.x {
        pos.x = half.x;
    }
    if b.left < 0.0 {
        pos.x = screen.x - half.x;
    }
    if b.bottom < 0.0 {
        pos.y = screen.y - half.y;
    }
    if b.top > screen.y {
        pos.y = half.y;
    }
    pos
}
