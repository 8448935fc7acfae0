//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, paced by the caller
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod asteroid;
pub mod bounds;
pub mod collision;
pub mod entity;
pub mod lives;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, Bias, Tier};
pub use bounds::{Bounds, wrap_position};
pub use collision::{projectile_hits_asteroid, ship_hits_asteroid, within_reach};
pub use entity::{Body, Entity};
pub use lives::LifePool;
pub use projectile::Projectile;
pub use ship::Ship;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Intent, TickInput, tick};
