//! Remaining ship lives

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePool {
    remaining: u32,
    starting: u32,
}

impl LifePool {
    pub fn new(starting: u32) -> Self {
        Self {
            remaining: starting,
            starting,
        }
    }

    /// Lose one life (never below zero)
    pub fn hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_game_over(&self) -> bool {
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.starting;
    }
}
