//! Building layout
//!
//! A skyline is a list of rows. Each row spreads `count` equally sized
//! buildings across a horizontal span, all standing on the ground line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Tint};
use super::state::Building;
use crate::error::SetupError;

/// One evenly spaced row of identical buildings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRow {
    pub count: u32,
    pub width: f32,
    pub height: f32,
    pub tint: Tint,
    /// Horizontal span the row is spread across
    pub span: f32,
    /// Extra space added between neighbours
    pub inner_padding: f32,
    /// Offset of the first building from x = 0
    pub outer_padding: f32,
}

impl BuildingRow {
    /// Left edge of the `index`-th building
    pub fn x_at(&self, index: u32) -> f32 {
        // Subtract one width so the last building still fits in the span
        let gap = (self.span - self.width) / self.count as f32;
        (gap + self.inner_padding) * index as f32 + self.outer_padding
    }
}

/// Every building row placed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skyline {
    pub rows: Vec<BuildingRow>,
}

impl Default for Skyline {
    /// Three big buildings across the screen with two clusters of three
    /// small ones in between them.
    fn default() -> Self {
        const SMALL_CLUSTER_SPAN: f32 = 240.0;
        const SMALL_OUTER_PADDING: f32 = 145.0;
        // Mirrors the left cluster into the gap between the right pair
        const RIGHT_CLUSTER_SHIFT: f32 = 3.35;

        let big = BuildingRow {
            count: 3,
            width: 80.0,
            height: 80.0,
            tint: Tint::GRAY,
            span: crate::consts::SCREEN_WIDTH,
            inner_padding: 100.0,
            outer_padding: 20.0,
        };
        let small_left = BuildingRow {
            count: 3,
            width: 40.0,
            height: 40.0,
            tint: Tint::LIGHTGRAY,
            span: SMALL_CLUSTER_SPAN,
            inner_padding: 0.0,
            outer_padding: SMALL_OUTER_PADDING,
        };
        let small_right = BuildingRow {
            outer_padding: SMALL_OUTER_PADDING * RIGHT_CLUSTER_SHIFT,
            ..small_left.clone()
        };

        Self {
            rows: vec![big, small_left, small_right],
        }
    }
}

impl Skyline {
    /// Place every row, in row order
    pub fn build(&self, screen_height: f32) -> Vec<Building> {
        self.rows
            .iter()
            .flat_map(|row| place_buildings(row, screen_height))
            .collect()
    }
}

/// Place one row of buildings standing on the bottom of the screen
pub fn place_buildings(row: &BuildingRow, screen_height: f32) -> Vec<Building> {
    (0..row.count)
        .map(|i| Building {
            rect: Rect::new(
                Vec2::new(row.x_at(i), screen_height - row.height),
                row.width,
                row.height,
                row.tint,
            ),
        })
        .collect()
}

/// Height of the tallest building, or None for an empty layout
pub fn tallest_building(buildings: &[Building]) -> Option<f32> {
    buildings.iter().map(Building::height).reduce(f32::max)
}

/// Y coordinate below which a missile head can possibly touch a building
pub fn collision_threshold(buildings: &[Building], screen_height: f32) -> Result<f32, SetupError> {
    let tallest = tallest_building(buildings).ok_or(SetupError::EmptySkyline)?;
    Ok(screen_height - tallest)
}
