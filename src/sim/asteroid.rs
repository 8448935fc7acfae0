//! Asteroid tiers and the splitting rule
//!
//! Tier constants live in lookup tables rather than per-type behavior:
//!
//! | Tier   | Spin (deg/frame) | Radius | Splits into                              |
//! |--------|------------------|--------|------------------------------------------|
//! | Large  | +1               | 15     | Medium(up), Medium(down), Small(default) |
//! | Medium | -2               | 5      | Small(up-left), Small(down-right)        |
//! | Small  | +5               | 2      | nothing                                  |
//!
//! A fresh fragment carries a `Bias` that forces the sign of its velocity
//! components so siblings fly apart from each other. The correction is
//! idempotent, so it is simply reapplied every frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity};
use crate::consts::ROCK_SPEED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Large,
    Medium,
    Small,
}

/// Directional hint given to a fragment at birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Bias {
    #[default]
    Default,
    Up,
    Down,
    UpLeft,
    DownRight,
}

/// Fixed per-tier constants
#[derive(Debug, Clone, Copy)]
pub struct TierSpec {
    pub spin: f32,
    pub radius: f32,
    /// Sprite extent for wrap
    pub size: (f32, f32),
    /// Max per-axis offset of children from the death position
    pub scatter: f32,
    /// Children spawned on destruction
    pub children: &'static [(Tier, Bias)],
}

const LARGE: TierSpec = TierSpec {
    spin: 1.0,
    radius: 15.0,
    size: (101.0, 84.0),
    scatter: 0.0,
    children: &[
        (Tier::Medium, Bias::Up),
        (Tier::Medium, Bias::Down),
        (Tier::Small, Bias::Default),
    ],
};

const MEDIUM: TierSpec = TierSpec {
    spin: -2.0,
    radius: 5.0,
    size: (43.0, 43.0),
    scatter: 50.0,
    children: &[(Tier::Small, Bias::UpLeft), (Tier::Small, Bias::DownRight)],
};

const SMALL: TierSpec = TierSpec {
    spin: 5.0,
    radius: 2.0,
    size: (28.0, 28.0),
    scatter: 0.0,
    children: &[],
};

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Large, Tier::Medium, Tier::Small];

    pub fn spec(self) -> &'static TierSpec {
        match self {
            Tier::Large => &LARGE,
            Tier::Medium => &MEDIUM,
            Tier::Small => &SMALL,
        }
    }

    /// Per-axis multiplier applied to velocity each frame
    pub fn motion_factor(self, bias: Bias) -> Vec2 {
        let (x, y) = match (self, bias) {
            (Tier::Large, _) => (ROCK_SPEED, ROCK_SPEED),
            (Tier::Medium, Bias::Up | Bias::Down) => (2.0 * ROCK_SPEED, 2.0 * ROCK_SPEED + 2.0),
            (Tier::Medium, _) => (2.0 * ROCK_SPEED, 2.0 * ROCK_SPEED),
            (Tier::Small, Bias::UpLeft) => (ROCK_SPEED, 3.0 * ROCK_SPEED),
            (Tier::Small, Bias::DownRight) => (3.0 * ROCK_SPEED, 3.0 * ROCK_SPEED),
            (Tier::Small, _) => (2.0 * ROCK_SPEED + 5.0, 2.0 * ROCK_SPEED),
        };
        Vec2::new(x, y)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    pub tier: Tier,
    pub bias: Bias,
}

impl Asteroid {
    /// Create an asteroid at `pos` drifting along a random heading
    pub fn new<R: Rng>(tier: Tier, bias: Bias, pos: Vec2, rng: &mut R) -> Self {
        let spec = tier.spec();
        let mut body = Body::new(pos, spec.radius, spec.size);
        body.heading = rng.random_range(1.0..=360.0);
        let rad = body.heading.to_radians();
        body.vel = Vec2::new(rad.cos(), rad.sin());
        Self { body, tier, bias }
    }

    /// Large asteroid at a random spot on screen
    pub fn seed<R: Rng>(screen: Vec2, rng: &mut R) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..=screen.x),
            rng.random_range(0.0..=screen.y),
        );
        Self::new(Tier::Large, Bias::Default, pos, rng)
    }

    /// Fragments produced when this asteroid is destroyed.
    ///
    /// Does not touch `alive`; the caller marks the asteroid dead and calls
    /// this exactly once before removing it.
    pub fn split<R: Rng>(&self, rng: &mut R) -> Vec<Asteroid> {
        let spec = self.tier.spec();
        spec.children
            .iter()
            .map(|&(tier, bias)| {
                let mut pos = self.body.pos;
                if spec.scatter > 0.0 {
                    pos.x += rng.random_range(-spec.scatter..=spec.scatter);
                    pos.y += rng.random_range(-spec.scatter..=spec.scatter);
                }
                Asteroid::new(tier, bias, pos, &mut *rng)
            })
            .collect()
    }

    fn apply_bias(&mut self) {
        let vel = &mut self.body.vel;
        match self.bias {
            Bias::Default => {}
            Bias::Up => vel.y = vel.y.abs(),
            Bias::Down => vel.y = -vel.y.abs(),
            Bias::UpLeft => {
                vel.y = vel.y.abs();
                vel.x = -vel.x.abs();
            }
            Bias::DownRight => {
                vel.y = -vel.y.abs();
                vel.x = vel.x.abs();
            }
        }
    }
}

impl Entity for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn advance(&mut self) {
        self.body.rotate(self.tier.spec().spin);
        self.apply_bias();
        self.body.pos += self.body.vel * self.tier.motion_factor(self.bias);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn count(children: &[Asteroid], tier: Tier) -> usize {
        children.iter().filter(|a| a.tier == tier).count()
    }

    #[test]
    fn test_large_splits_into_three() {
        let mut rng = rng();
        let rock = Asteroid::new(Tier::Large, Bias::Default, Vec2::new(300.0, 200.0), &mut rng);
        let children = rock.split(&mut rng);

        assert_eq!(children.len(), 3);
        assert_eq!(count(&children, Tier::Medium), 2);
        assert_eq!(count(&children, Tier::Small), 1);
        assert!(children.iter().all(|c| c.is_alive()));
        // Spawned exactly where the parent died
        assert!(children.iter().all(|c| c.body.pos == rock.body.pos));
        let biases: Vec<_> = children.iter().map(|c| c.bias).collect();
        assert_eq!(biases, vec![Bias::Up, Bias::Down, Bias::Default]);
        // Splitting is a pure request
        assert!(rock.is_alive());
    }

    #[test]
    fn test_medium_splits_into_two_scattered() {
        let mut rng = rng();
        let rock = Asteroid::new(Tier::Medium, Bias::Up, Vec2::new(300.0, 200.0), &mut rng);
        let children = rock.split(&mut rng);

        assert_eq!(children.len(), 2);
        assert_eq!(count(&children, Tier::Small), 2);
        assert_eq!(children[0].bias, Bias::UpLeft);
        assert_eq!(children[1].bias, Bias::DownRight);
        for child in &children {
            let offset = child.body.pos - rock.body.pos;
            assert!(offset.x.abs() <= 50.001 && offset.y.abs() <= 50.001);
        }
    }

    #[test]
    fn test_small_splits_into_nothing() {
        let mut rng = rng();
        let rock = Asteroid::new(Tier::Small, Bias::Default, Vec2::ZERO, &mut rng);
        assert!(rock.split(&mut rng).is_empty());
    }

    #[test]
    fn test_full_cascade_spawns_seven() {
        let mut rng = rng();
        let first = Asteroid::new(Tier::Large, Bias::Default, Vec2::new(500.0, 400.0), &mut rng);
        let mut live = vec![first];
        let mut spawned = 0;
        let mut destroyed = 0;

        while let Some(rock) = live.pop() {
            let children = rock.split(&mut rng);
            spawned += children.len();
            destroyed += 1;
            live.extend(children);
        }

        assert_eq!(spawned, 7);
        assert_eq!(destroyed, 8);
    }

    #[test]
    fn test_bias_forces_velocity_signs() {
        let mut rng = rng();
        for _ in 0..20 {
            let mut up = Asteroid::new(Tier::Medium, Bias::Up, Vec2::ZERO, &mut rng);
            let mut down = Asteroid::new(Tier::Medium, Bias::Down, Vec2::ZERO, &mut rng);
            let mut up_left = Asteroid::new(Tier::Small, Bias::UpLeft, Vec2::ZERO, &mut rng);
            let mut down_right = Asteroid::new(Tier::Small, Bias::DownRight, Vec2::ZERO, &mut rng);
            for _ in 0..3 {
                up.advance();
                down.advance();
                up_left.advance();
                down_right.advance();
            }
            assert!(up.body.vel.y >= 0.0 && up.body.pos.y >= 0.0);
            assert!(down.body.vel.y <= 0.0 && down.body.pos.y <= 0.0);
            assert!(up_left.body.vel.y >= 0.0 && up_left.body.vel.x <= 0.0);
            assert!(down_right.body.vel.y <= 0.0 && down_right.body.vel.x >= 0.0);
        }
    }

    #[test]
    fn test_spin_per_tier() {
        let mut rng = rng();
        for tier in Tier::ALL {
            let mut rock = Asteroid::new(tier, Bias::Default, Vec2::ZERO, &mut rng);
            rock.body.heading = 180.0;
            rock.advance();
            assert!((rock.body.heading - (180.0 + tier.spec().spin)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_large_drifts_at_base_speed() {
        let mut rng = rng();
        let mut rock = Asteroid::new(Tier::Large, Bias::Default, Vec2::ZERO, &mut rng);
        rock.body.vel = Vec2::new(1.0, 0.0);
        rock.advance();
        assert!((rock.body.pos.x - ROCK_SPEED).abs() < 1e-5);
        assert_eq!(rock.body.pos.y, 0.0);
    }

    #[test]
    fn test_velocity_is_unit_heading() {
        let mut rng = rng();
        let rock = Asteroid::seed(Vec2::new(1000.0, 800.0), &mut rng);
        assert_eq!(rock.tier, Tier::Large);
        assert!((rock.body.vel.length() - 1.0).abs() < 1e-4);
        assert!(rock.body.pos.x >= 0.0 && rock.body.pos.x <= 1000.0);
    }
}
