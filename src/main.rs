//! Rock Breaker headless runner
//!
//! Drives the simulation with a fixed-step accumulator and a scripted pilot,
//! standing in for the window/input/render shell.
//!
//! Usage: `rock-breaker [settings.json] [frames]`

use std::process::ExitCode;

use rock_breaker::audio::{AudioManager, LogBackend};
use rock_breaker::consts::*;
use rock_breaker::render::{collect_sprites, hud};
use rock_breaker::sim::{GameEvent, GameState, Intent, TickInput, tick};
use rock_breaker::{ConfigError, Settings};

/// Game instance holding all state
struct Game {
    state: GameState,
    audio: AudioManager<LogBackend>,
    accumulator: f32,
    input: TickInput,
    rocks_destroyed: u32,
}

impl Game {
    fn new(settings: Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(settings)?,
            audio: AudioManager::new(LogBackend),
            accumulator: 0.0,
            input: TickInput::default(),
            rocks_destroyed: 0,
        })
    }

    /// Run simulation ticks for `dt` seconds of wall time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= FRAME_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_one_shots();

            let events = self.state.drain_events();
            self.audio.play_events(&events);
            for event in &events {
                match event {
                    GameEvent::AsteroidDestroyed { .. } => self.rocks_destroyed += 1,
                    GameEvent::ShipDestroyed { lives_remaining } => {
                        log::warn!("Ship lost ({} left)", lives_remaining);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Scripted pilot: sweep left, pulse thrust, fire every few frames
    fn pilot(&mut self, frame: u64) {
        let mut intents = Vec::new();
        if frame % 90 < 30 {
            intents.push(Intent::TurnLeft);
        }
        if frame % 120 == 0 {
            intents.push(Intent::ThrustForward);
        }
        if frame % 8 == 0 {
            intents.push(Intent::Fire);
        }
        if self.state.is_game_over() {
            intents.push(Intent::Restart);
        }
        self.input = TickInput::from_intents(intents);
    }
}

fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Rock Breaker (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let frames: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3600);

    let mut game = match load_settings(args.get(1).map(String::as_str)).and_then(Game::new) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    for frame in 0..frames {
        game.pilot(frame);
        game.update(FRAME_DT);

        if frame % 600 == 0 {
            let hud = hud(&game.state);
            log::info!(
                "frame {frame}: {} sprites, {} lives, game over: {}",
                collect_sprites(&game.state).len(),
                hud.lives,
                hud.game_over
            );
        }
    }

    let hud = hud(&game.state);
    println!(
        "{frames} frames: {} asteroids destroyed, {} remaining, {} lives left",
        game.rocks_destroyed,
        game.state.asteroids.len(),
        hud.lives
    );
    ExitCode::SUCCESS
}
