//! Render view of the simulation
//!
//! Drawing happens elsewhere; this module only flattens the live state into
//! sprites and HUD values. The ship blink during invulnerability is derived
//! here from the counter parity, never stored in the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Entity, GameState, Tier};

/// Closed set of things the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Ship,
    Projectile,
    LargeAsteroid,
    MediumAsteroid,
    SmallAsteroid,
}

impl SpriteKind {
    pub fn asteroid(tier: Tier) -> Self {
        match tier {
            Tier::Large => SpriteKind::LargeAsteroid,
            Tier::Medium => SpriteKind::MediumAsteroid,
            Tier::Small => SpriteKind::SmallAsteroid,
        }
    }
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub pos: Vec2,
    /// Degrees
    pub heading: f32,
    pub kind: SpriteKind,
    pub visible: bool,
}

/// HUD values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub lives: u32,
    pub game_over: bool,
}

/// Sprites for every live entity: asteroids, then projectiles, then the ship
pub fn collect_sprites(state: &GameState) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(state.asteroids.len() + state.projectiles.len() + 1);

    sprites.extend(state.asteroids.iter().filter(|a| a.is_alive()).map(|a| Sprite {
        pos: a.body.pos,
        heading: a.body.heading,
        kind: SpriteKind::asteroid(a.tier),
        visible: true,
    }));

    sprites.extend(state.projectiles.iter().filter(|p| p.is_alive()).map(|p| Sprite {
        pos: p.body.pos,
        heading: p.body.heading,
        kind: SpriteKind::Projectile,
        visible: true,
    }));

    let ship = &state.ship;
    if ship.is_alive() {
        sprites.push(Sprite {
            pos: ship.body.pos,
            heading: ship.body.heading,
            kind: SpriteKind::Ship,
            // Blink on odd frames while invulnerable
            visible: ship.invulnerable % 2 == 0,
        });
    }

    sprites
}

pub fn hud(state: &GameState) -> Hud {
    Hud {
        lives: state.lives.remaining(),
        game_over: state.is_game_over(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;

    fn state() -> GameState {
        GameState::new(Settings::with_seed(8)).unwrap()
    }

    #[test]
    fn test_sprites_cover_live_entities() {
        let mut state = state();
        state.asteroids[0].body.alive = false;
        let sprites = collect_sprites(&state);

        let rocks = sprites
            .iter()
            .filter(|s| s.kind == SpriteKind::LargeAsteroid)
            .count();
        assert_eq!(rocks, INITIAL_ROCK_COUNT as usize - 1);
        assert_eq!(sprites.last().map(|s| s.kind), Some(SpriteKind::Ship));
    }

    #[test]
    fn test_ship_blinks_while_invulnerable() {
        let mut state = state();
        state.ship.invulnerable = 7;
        let ship = collect_sprites(&state).pop().unwrap();
        assert!(!ship.visible);

        state.ship.invulnerable = 6;
        assert!(collect_sprites(&state).pop().unwrap().visible);

        state.ship.invulnerable = 0;
        assert!(collect_sprites(&state).pop().unwrap().visible);
    }

    #[test]
    fn test_dead_ship_not_drawn() {
        let mut state = state();
        state.ship.body.alive = false;
        assert!(collect_sprites(&state).iter().all(|s| s.kind != SpriteKind::Ship));
    }

    #[test]
    fn test_hud() {
        let mut state = state();
        state.lives.hit();
        assert_eq!(
            hud(&state),
            Hud {
                lives: STARTING_LIVES - 1,
                game_over: false
            }
        );
    }
}
