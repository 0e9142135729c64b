//! Missile Commander - a small missile-defence arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, layout, collisions)
//! - `renderer`: Draw-list generation for the presentation layer
//! - `platform`: Window/input collaborator abstraction and the frame loop
//! - `settings`: Data-driven tuning and configuration
//! - `error`: Setup failures surfaced before the loop starts

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SetupError;
pub use settings::{LauncherOrigin, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Display surface dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;
    /// Target presentation rate (one simulation tick per frame)
    pub const TARGET_FPS: u32 = 60;

    /// Frames between enemy launches (120 frames = 2 seconds at 60 FPS)
    pub const ENEMY_SPAWN_PERIOD: u32 = 120;

    /// Missile defaults
    pub const PLAYER_MISSILE_SPEED: f32 = 1.0;
    pub const ENEMY_MISSILE_SPEED: f32 = 0.01;
    /// Traveled-distance clamp (also caps the per-frame step length)
    pub const MISSILE_DISTANCE_MIN: f32 = 0.0;
    pub const MISSILE_DISTANCE_MAX: f32 = 100.0;
    /// Launcher inset from the bottom-left corner
    pub const LAUNCHER_INSET: f32 = 50.0;
    /// Radius of the marker drawn at a missile's head
    pub const MISSILE_MARKER_RADIUS: f32 = 5.0;

    /// Explosion radius bounds (grow to max, shrink until below min)
    pub const EXPLOSION_MIN_RADIUS: f32 = 5.0;
    pub const EXPLOSION_MAX_RADIUS: f32 = 20.0;
    /// Radius change per frame
    pub const EXPLOSION_GROWTH: f32 = 1.0;
}

/// Move `from` toward `to` by at most `max_distance`.
///
/// Lands exactly on `to` once the remaining distance fits in one step, so a
/// missile that keeps stepping eventually compares equal to its target.
#[inline]
pub fn move_towards(from: Vec2, to: Vec2, max_distance: f32) -> Vec2 {
    let delta = to - from;
    let dist_sq = delta.length_squared();

    if dist_sq == 0.0 || (max_distance >= 0.0 && dist_sq <= max_distance * max_distance) {
        return to;
    }

    let dist = dist_sq.sqrt();
    from + delta / dist * max_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_towards_partial_step() {
        let p = move_towards(Vec2::ZERO, Vec2::new(10.0, 0.0), 3.0);
        assert_eq!(p, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_move_towards_snaps_to_target() {
        let target = Vec2::new(3.0, 4.0);
        assert_eq!(move_towards(Vec2::ZERO, target, 5.0), target);
        assert_eq!(move_towards(Vec2::ZERO, target, 50.0), target);
    }

    #[test]
    fn test_move_towards_zero_step_stays_put() {
        let from = Vec2::new(1.0, 2.0);
        assert_eq!(move_towards(from, Vec2::new(9.0, 9.0), 0.0), from);
    }
}
