//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no delta-time scaling
//! - Seeded RNG only
//! - Stable iteration order (insertion order, compacted on removal)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod layout;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod update;

pub use collision::{CollisionRules, apply_collisions};
pub use geometry::{Circle, Rect, Segment, Tint};
pub use layout::{BuildingRow, Skyline, collision_threshold, place_buildings, tallest_building};
pub use spawner::{SpawnTimer, spawn_enemy_missile, spawn_player_missile};
pub use state::{Allegiance, Building, Explosion, GameEvent, GamePhase, GameState, Missile};
pub use tick::{TickInput, tick};
pub use update::{update_explosions, update_missiles};
