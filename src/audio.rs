//! Audio dispatch
//!
//! The simulation only emits events. This module decides which of them make
//! a sound and forwards them to whatever backend actually plays audio.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Projectile fired
    Laser,
}

impl SoundEffect {
    /// The sound an event triggers, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ProjectileFired => Some(SoundEffect::Laser),
            _ => None,
        }
    }
}

/// Something that can play a sound at a given volume
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {:?} at volume {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sounds for a batch of drained events
    pub fn play_events(&mut self, events: &[GameEvent]) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.backend.play(effect, vol);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Tier;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_only_fire_makes_sound() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.play_events(&[
            GameEvent::ProjectileFired,
            GameEvent::AsteroidDestroyed { tier: Tier::Large },
            GameEvent::ShipDestroyed { lives_remaining: 2 },
            GameEvent::ProjectileFired,
        ]);
        assert_eq!(audio.backend().0.len(), 2);
        assert!(audio.backend().0.iter().all(|(e, _)| *e == SoundEffect::Laser));
    }

    #[test]
    fn test_volume_and_mute() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(2.0);
        audio.set_sfx_volume(0.5);
        audio.play_events(&[GameEvent::ProjectileFired]);
        assert_eq!(audio.backend().0, vec![(SoundEffect::Laser, 0.5)]);

        audio.set_muted(true);
        audio.play_events(&[GameEvent::ProjectileFired]);
        assert_eq!(audio.backend().0.len(), 1);
    }
}
