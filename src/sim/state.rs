//! Game state and core simulation types
//!
//! `GameState` is the sole owner of every entity collection. Entities only
//! ever flag themselves dead; membership changes happen here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, Tier};
use super::lives::LifePool;
use super::projectile::Projectile;
use super::ship::Ship;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; frozen until restart
    GameOver,
}

/// Discrete things that happened during a tick, for audio/effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired,
    AsteroidDestroyed { tier: Tier },
    ShipDestroyed { lives_remaining: u32 },
    GameOver,
    Restarted,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    /// Simulation tick counter (reset on restart)
    pub time_ticks: u64,
    pub ship: Ship,
    /// Live asteroids in stable spawn order
    pub asteroids: Vec<Asteroid>,
    /// Live projectiles in firing order
    pub projectiles: Vec<Projectile>,
    pub lives: LifePool,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state, rejecting invalid settings
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let screen = Vec2::new(settings.screen_width, settings.screen_height);
        let mut state = Self {
            phase: GamePhase::Playing,
            time_ticks: 0,
            ship: Ship::spawn(screen),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            lives: LifePool::new(settings.starting_lives),
            rng: Pcg32::seed_from_u64(settings.seed),
            events: Vec::new(),
            settings,
        };
        state.seed_asteroids();

        log::info!(
            "New game: {}x{} screen, {} asteroids, {} lives, seed {}",
            screen.x,
            screen.y,
            state.asteroids.len(),
            state.lives.remaining(),
            state.settings.seed
        );
        Ok(state)
    }

    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.settings.screen_width, self.settings.screen_height)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Reset everything to initial conditions.
    ///
    /// The RNG keeps running, so the new asteroid field differs from the last.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.ship = Ship::spawn(self.screen());
        self.projectiles.clear();
        self.lives.reset();
        self.seed_asteroids();
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted with {} lives", self.lives.remaining());
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn seed_asteroids(&mut self) {
        let screen = self.screen();
        self.asteroids.clear();
        for _ in 0..self.settings.initial_asteroids {
            let rock = Asteroid::seed(screen, &mut self.rng);
            self.asteroids.push(rock);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_game_initial_conditions() {
        let state = GameState::new(Settings::with_seed(1)).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.asteroids.len(), INITIAL_ROCK_COUNT as usize);
        assert!(state.asteroids.iter().all(|a| a.tier == Tier::Large));
        assert!(state.projectiles.is_empty());
        assert_eq!(state.lives.remaining(), STARTING_LIVES);
        assert_eq!(state.ship.body.pos, state.screen() / 2.0);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let settings = Settings {
            initial_asteroids: 0,
            ..Settings::default()
        };
        assert!(matches!(GameState::new(settings), Err(ConfigError::NoAsteroids)));
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = GameState::new(Settings::with_seed(99)).unwrap();
        let b = GameState::new(Settings::with_seed(99)).unwrap();
        for (ra, rb) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(ra.body, rb.body);
        }
    }

    #[test]
    fn test_restart_reseeds_field() {
        let mut state = GameState::new(Settings::with_seed(5)).unwrap();
        let first: Vec<_> = state.asteroids.iter().map(|a| a.body.pos).collect();
        state.lives.hit();
        state.asteroids.truncate(1);
        state.restart();

        assert_eq!(state.asteroids.len(), INITIAL_ROCK_COUNT as usize);
        assert_eq!(state.lives.remaining(), STARTING_LIVES);
        let second: Vec<_> = state.asteroids.iter().map(|a| a.body.pos).collect();
        assert_ne!(first, second);
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
        assert!(state.drain_events().is_empty());
    }
}
