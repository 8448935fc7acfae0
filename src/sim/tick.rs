//! Fixed-step simulation tick
//!
//! Per-frame protocol, in strict order:
//! 1. controls (turn, thrust, fire)
//! 2. advance + wrap every live entity
//! 3. collision pass
//! 4. cleanup: drop dead projectiles, split and drop dead asteroids
//! 5. respawn the ship or end the game

use serde::{Deserialize, Serialize};

use super::collision::{projectile_hits_asteroid, ship_hits_asteroid};
use super::entity::Entity;
use super::projectile::Projectile;
use super::ship::Ship;
use super::state::{GameEvent, GamePhase, GameState};

/// A control intent delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    TurnLeft,
    TurnRight,
    ThrustForward,
    Fire,
    Restart,
}

/// Intents active for a single tick.
///
/// `fire` and `restart` are one-shot: the driver clears them after the tick
/// that consumed them. The turn/thrust flags stay set while held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub restart: bool,
}

impl TickInput {
    pub fn from_intents<I: IntoIterator<Item = Intent>>(intents: I) -> Self {
        let mut input = Self::default();
        for intent in intents {
            match intent {
                Intent::TurnLeft => input.turn_left = true,
                Intent::TurnRight => input.turn_right = true,
                Intent::ThrustForward => input.thrust = true,
                Intent::Fire => input.fire = true,
                Intent::Restart => input.restart = true,
            }
        }
        input
    }

    /// Clear one-shot inputs after processing
    pub fn clear_one_shots(&mut self) {
        self.fire = false;
        self.restart = false;
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;

    apply_controls(state, input);
    advance_entities(state);
    detect_collisions(state);
    remove_dead(state);
    respawn_or_end(state);
}

fn apply_controls(state: &mut GameState, input: &TickInput) {
    let ship = &mut state.ship;
    if !ship.is_alive() {
        return;
    }

    if input.turn_left {
        ship.turn_left();
    }
    if input.turn_right {
        ship.turn_right();
    }
    if input.thrust || ship.inertia {
        ship.thrust();
    }
    if input.fire {
        state.projectiles.push(Projectile::fire(ship));
        state.events.push(GameEvent::ProjectileFired);
        log::debug!(
            "Fired at heading {:.1} ({} in flight)",
            ship.body.heading,
            state.projectiles.len()
        );
    }
}

fn advance_entities(state: &mut GameState) {
    let screen = state.screen();

    for rock in state.asteroids.iter_mut().filter(|a| a.is_alive()) {
        rock.advance();
        rock.wrap(screen);
    }

    if state.ship.is_alive() {
        state.ship.advance();
        state.ship.wrap(screen);
    }

    for shot in state.projectiles.iter_mut().filter(|p| p.is_alive()) {
        shot.advance();
        shot.wrap(screen);
    }
}

/// Mark colliding entities dead.
///
/// Asteroids are visited in stable order, projectiles likewise. A dead
/// entity never matches again, so the first pairing found wins and no
/// projectile or asteroid registers more than one hit per frame.
fn detect_collisions(state: &mut GameState) {
    let GameState {
        ship,
        asteroids,
        projectiles,
        lives,
        events,
        ..
    } = state;

    for rock in asteroids.iter_mut() {
        for shot in projectiles.iter_mut() {
            if projectile_hits_asteroid(&shot.body, &rock.body) {
                shot.body.alive = false;
                rock.body.alive = false;
                break;
            }
        }

        if !ship.is_invulnerable() && ship_hits_asteroid(&ship.body, &rock.body) {
            ship.body.alive = false;
            lives.hit();
            events.push(GameEvent::ShipDestroyed {
                lives_remaining: lives.remaining(),
            });
            log::info!("Ship destroyed, {} lives left", lives.remaining());
        }
    }
}

/// Drop dead projectiles and replace dead asteroids with their fragments.
///
/// Fragments are buffered and appended after the dead are removed, so they
/// neither get split themselves this frame nor disturb the iteration.
fn remove_dead(state: &mut GameState) {
    state.projectiles.retain(|p| p.is_alive());

    let mut fragments = Vec::new();
    for rock in state.asteroids.iter().filter(|a| !a.is_alive()) {
        let children = rock.split(&mut state.rng);
        log::debug!(
            "{:?} asteroid destroyed at ({:.0}, {:.0}), {} fragments",
            rock.tier,
            rock.body.pos.x,
            rock.body.pos.y,
            children.len()
        );
        state
            .events
            .push(GameEvent::AsteroidDestroyed { tier: rock.tier });
        fragments.extend(children);
    }

    state.asteroids.retain(|a| a.is_alive());
    state.asteroids.extend(fragments);
}

fn respawn_or_end(state: &mut GameState) {
    if state.ship.is_alive() {
        return;
    }

    if state.lives.is_game_over() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over after {} ticks", state.time_ticks);
    } else {
        state.ship = Ship::spawn(state.screen());
    }
}
