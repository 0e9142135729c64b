//! Missile spawning
//!
//! Player missiles launch from a fixed point toward the click position.
//! Enemy missiles drop from a random spot on the top edge toward a random
//! spot on the ground, paced by a frame-count timer.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Tint;
use super::state::{Allegiance, Missile};

/// Counts frames and fires once every `period` frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub period: u32,
    pub frames: u32,
}

impl SpawnTimer {
    pub fn new(period: u32) -> Self {
        Self { period, frames: 0 }
    }

    /// Count one frame. Returns true (and restarts the count) when the
    /// period has elapsed.
    pub fn advance(&mut self) -> bool {
        self.frames += 1;
        if self.frames >= self.period {
            self.frames = 0;
            true
        } else {
            false
        }
    }
}

/// A friendly missile launched from `origin` toward `target`
pub fn spawn_player_missile(origin: Vec2, target: Vec2, speed: f32) -> Missile {
    Missile::new(origin, target, speed, Allegiance::Friendly, Tint::GREEN)
}

/// A hostile missile from a random top-edge point to a random ground point
pub fn spawn_enemy_missile<R: Rng>(rng: &mut R, width: f32, height: f32, speed: f32) -> Missile {
    let origin = Vec2::new(rng.random_range(0.0..=width), 0.0);
    let target = Vec2::new(rng.random_range(0.0..=width), height);
    Missile::new(origin, target, speed, Allegiance::Hostile, Tint::RED)
}
