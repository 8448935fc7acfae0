//! Session settings
//!
//! Fixed for the lifetime of a session; a restart reuses the same settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::asteroid::Tier;

/// Configuration handed to `GameState::new`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical screen width (wrap boundary, ship spawn, rock placement)
    pub screen_width: f32,
    /// Logical screen height
    pub screen_height: f32,
    /// Lives at the start of a run
    pub starting_lives: u32,
    /// Large asteroids seeded at the start of a run
    pub initial_asteroids: u32,
    /// RNG seed for asteroid placement and fragment headings
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            starting_lives: STARTING_LIVES,
            initial_asteroids: INITIAL_ROCK_COUNT,
            seed: 0x5EED_0F_B0CC,
        }
    }
}

impl Settings {
    /// Default settings with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Reject configurations that would produce undefined geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.screen_width, self.screen_height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidScreen { width, height });
        }

        // Wrap repositions by half a sprite; a sprite wider than the screen
        // would trip both edges at once.
        let (sprite_w, sprite_h) = largest_sprite();
        if width < sprite_w || height < sprite_h {
            return Err(ConfigError::ScreenTooSmall {
                width,
                height,
                sprite_w,
                sprite_h,
            });
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.initial_asteroids == 0 {
            return Err(ConfigError::NoAsteroids);
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        if let Err(e) = settings.validate() {
            log::warn!("Rejected settings: {e}");
            return Err(e);
        }
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).inspect_err(|e| {
            log::warn!("Could not read {}: {e}", path.display());
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn largest_sprite() -> (f32, f32) {
    [SHIP_SIZE, PROJECTILE_SIZE]
        .into_iter()
        .chain(Tier::ALL.iter().map(|t| t.spec().size))
        .fold((0.0, 0.0), |(w, h), (sw, sh)| (w.max(sw), h.max(sh)))
}
