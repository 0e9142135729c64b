//! Game state and core simulation types
//!
//! Entities own a geometry value and add their domain fields on top.
//! `GameState` owns every collection for the whole run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionRules;
use super::geometry::{Circle, Rect, Segment, Tint};
use super::layout::collision_threshold;
use super::spawner::SpawnTimer;
use crate::consts::*;
use crate::error::SetupError;
use crate::move_towards;
use crate::settings::Settings;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Buildings remain, simulation advances every frame
    #[default]
    Running,
    /// Every building was destroyed; ticks are no-ops
    Overrun,
}

/// Which side fired a missile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allegiance {
    /// Fired by the player; detonates into an explosion on arrival
    Friendly,
    /// Spawned by the timer; destroys buildings it touches
    Hostile,
}

/// A missile: a trail segment chasing a fixed target point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    /// Trail from launch point to current head
    pub trail: Segment,
    pub target: Vec2,
    /// Step length for the next frame, grows by `speed` each frame
    pub distance: f32,
    pub speed: f32,
    pub allegiance: Allegiance,
}

impl Missile {
    pub fn new(origin: Vec2, target: Vec2, speed: f32, allegiance: Allegiance, tint: Tint) -> Self {
        Self {
            trail: Segment::at(origin, tint),
            target,
            distance: MISSILE_DISTANCE_MIN,
            speed,
            allegiance,
        }
    }

    /// Current head position
    #[inline]
    pub fn head(&self) -> Vec2 {
        self.trail.end
    }

    #[inline]
    pub fn is_hostile(&self) -> bool {
        self.allegiance == Allegiance::Hostile
    }

    /// Step the head toward the target, then accelerate
    pub fn advance(&mut self) {
        self.trail.end = move_towards(self.trail.end, self.target, self.distance);
        self.distance = (self.distance + self.speed).clamp(MISSILE_DISTANCE_MIN, MISSILE_DISTANCE_MAX);
    }

    /// Whether the head sits on the target.
    ///
    /// A tolerance of zero means exact float equality, which works because
    /// `move_towards` snaps onto the target on the final step.
    pub fn has_arrived(&self, tolerance: f32) -> bool {
        if tolerance <= 0.0 {
            self.trail.end == self.target
        } else {
            self.trail.end.distance(self.target) <= tolerance
        }
    }
}

/// An expanding-then-shrinking blast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub blast: Circle,
    /// Radius change applied each frame (+1 growing, -1 shrinking)
    pub growth: f32,
}

impl Explosion {
    pub fn new(center: Vec2) -> Self {
        Self {
            blast: Circle::new(center, EXPLOSION_MIN_RADIUS, Tint::RED),
            growth: EXPLOSION_GROWTH,
        }
    }

    /// Advance one frame. Returns false once the blast has faded out.
    ///
    /// The fade check looks at the radius before this frame's growth, so a
    /// blast spends one frame below the minimum radius before it goes.
    pub fn step(&mut self) -> bool {
        if self.blast.radius >= EXPLOSION_MAX_RADIUS {
            self.growth = -EXPLOSION_GROWTH;
        }
        if self.blast.radius < EXPLOSION_MIN_RADIUS {
            return false;
        }
        self.blast.radius += self.growth;
        true
    }

    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.blast.contains_point(point)
    }
}

/// A static, destructible building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub rect: Rect,
}

impl Building {
    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.height
    }
}

/// Things that happened during the last tick (diagnostics, not score)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    MissileLaunched { allegiance: Allegiance, origin: Vec2 },
    MissileArrived { allegiance: Allegiance, at: Vec2 },
    BuildingDestroyed { at: Vec2 },
    MissileIntercepted { allegiance: Allegiance, at: Vec2 },
    ExplosionFaded { at: Vec2 },
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Frames simulated so far
    pub frame: u64,
    pub phase: GamePhase,
    /// Playfield size
    pub width: f32,
    pub height: f32,
    /// Where player missiles launch from
    pub launcher: Vec2,
    pub player_missile_speed: f32,
    pub enemy_missile_speed: f32,
    pub spawn_timer: SpawnTimer,
    pub rules: CollisionRules,
    pub missiles: Vec<Missile>,
    pub buildings: Vec<Building>,
    pub explosions: Vec<Explosion>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build the initial state: lay out the skyline and derive the
    /// building-collision threshold. Fails before any frame runs if the
    /// settings are unusable.
    pub fn new(settings: &Settings) -> Result<Self, SetupError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(rand::random);
        let buildings = settings.skyline.build(settings.screen_height);
        let threshold = collision_threshold(&buildings, settings.screen_height)?;

        log::info!(
            "New game: seed {}, {} buildings, building checks below y={}",
            seed,
            buildings.len(),
            threshold
        );

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            phase: GamePhase::Running,
            width: settings.screen_width,
            height: settings.screen_height,
            launcher: settings
                .launcher
                .position(settings.screen_width, settings.screen_height),
            player_missile_speed: settings.player_missile_speed,
            enemy_missile_speed: settings.enemy_missile_speed,
            spawn_timer: SpawnTimer::new(settings.enemy_spawn_period),
            rules: CollisionRules {
                building_threshold: settings.gate_building_checks.then_some(threshold),
                arrival_tolerance: settings.arrival_tolerance,
            },
            missiles: Vec::new(),
            buildings,
            explosions: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Take the events recorded by the last tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[inline]
    pub fn is_overrun(&self) -> bool {
        self.phase == GamePhase::Overrun
    }
}
