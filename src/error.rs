//! Configuration errors
//!
//! The simulation itself never fails once constructed; everything that can go
//! wrong is caught while validating `Settings`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen size must be finite and positive, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },

    #[error("screen {width}x{height} is smaller than the largest sprite ({sprite_w}x{sprite_h})")]
    ScreenTooSmall {
        width: f32,
        height: f32,
        sprite_w: f32,
        sprite_h: f32,
    },

    #[error("starting lives must be at least 1")]
    NoLives,

    #[error("initial asteroid count must be at least 1")]
    NoAsteroids,

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
