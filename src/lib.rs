//! Rock Breaker - an asteroids-style arcade simulation core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, wrap, collisions, splitting)
//! - `settings`: Validated session configuration
//! - `render`: Sprite/HUD view handed to an external renderer
//! - `audio`: Maps simulation events onto sound effects

pub mod audio;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default logical screen size
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 30.0;
    pub const SHIP_TURN_AMOUNT: f32 = 3.0; // degrees per frame
    pub const SHIP_THRUST: f32 = 0.1;
    pub const SHIP_INVULNERABLE_FRAMES: u32 = 120;
    pub const SHIP_SIZE: (f32, f32) = (99.0, 75.0);

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 30.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_LIFE: u32 = 60;
    pub const PROJECTILE_SIZE: (f32, f32) = (9.0, 54.0);

    /// Asteroid base drift multiplier (tier tables scale from this)
    pub const ROCK_SPEED: f32 = 1.5;

    /// Extra reach added to each radius in projectile/asteroid tests
    pub const PROJECTILE_HIT_MARGIN: f32 = 3.0;
    /// Extra reach added to each radius in ship/asteroid tests
    pub const SHIP_HIT_MARGIN: f32 = 15.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 4;
    pub const INITIAL_ROCK_COUNT: u32 = 6;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Unit vector a heading points along.
///
/// Heading 0 points up the screen (+y); positive headings turn
/// counter-clockwise.
#[inline]
pub fn heading_to_vec(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(-rad.sin(), rad.cos())
}
