//! Game settings and tuning
//!
//! Loaded from a JSON file next to the binary; any field left out falls back
//! to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;
use crate::sim::Skyline;

/// Where player missiles launch from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LauncherOrigin {
    /// Just inside the bottom-left corner
    #[default]
    BottomLeft,
    /// Middle of the screen
    Center,
}

impl LauncherOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LauncherOrigin::BottomLeft => "BottomLeft",
            LauncherOrigin::Center => "Center",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bottomleft" | "bottom-left" | "bottom_left" => Some(LauncherOrigin::BottomLeft),
            "center" | "centre" => Some(LauncherOrigin::Center),
            _ => None,
        }
    }

    /// Launch point on a `width` x `height` screen
    pub fn position(&self, width: f32, height: f32) -> Vec2 {
        match self {
            LauncherOrigin::BottomLeft => Vec2::new(LAUNCHER_INSET, height - LAUNCHER_INSET),
            LauncherOrigin::Center => Vec2::new(width / 2.0, height / 2.0),
        }
    }
}

/// Game settings/tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Display ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub target_fps: u32,
    /// Show FPS counter
    pub show_fps: bool,

    // === Spawning ===
    /// Frames between enemy launches
    pub enemy_spawn_period: u32,
    pub launcher: LauncherOrigin,
    pub player_missile_speed: f32,
    pub enemy_missile_speed: f32,

    // === Collisions ===
    /// Arrival distance; 0 requires the head to land exactly on the target
    pub arrival_tolerance: f32,
    /// Skip building checks for heads above the tallest roof
    pub gate_building_checks: bool,

    pub skyline: Skyline,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            show_fps: true,

            enemy_spawn_period: ENEMY_SPAWN_PERIOD,
            launcher: LauncherOrigin::BottomLeft,
            player_missile_speed: PLAYER_MISSILE_SPEED,
            enemy_missile_speed: ENEMY_MISSILE_SPEED,

            arrival_tolerance: 0.0,
            gate_building_checks: true,

            skyline: Skyline::default(),
        }
    }
}

impl Settings {
    /// Check everything the simulation relies on
    pub fn validate(&self) -> Result<(), SetupError> {
        for (name, value) in [
            ("screen width", self.screen_width),
            ("screen height", self.screen_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SetupError::InvalidDimension { name, value });
            }
        }
        if !(self.arrival_tolerance.is_finite() && self.arrival_tolerance >= 0.0) {
            return Err(SetupError::InvalidDimension {
                name: "arrival tolerance",
                value: self.arrival_tolerance,
            });
        }
        if self.target_fps == 0 {
            return Err(SetupError::ZeroFrameRate);
        }
        if self.enemy_spawn_period == 0 {
            return Err(SetupError::ZeroSpawnPeriod);
        }
        Ok(())
    }

    /// Seconds per frame at the target rate
    pub fn frame_time(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
