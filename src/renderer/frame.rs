//! Per-frame draw list
//!
//! Turns a `GameState` into a single triangle list that any presentation
//! backend can upload as-is.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::MISSILE_MARKER_RADIUS;
use crate::sim::GameState;

/// Thickness of a missile trail in pixels
pub const TRAIL_THICKNESS: f32 = 1.0;
/// Triangle fan resolution for circles
const CIRCLE_SEGMENTS: u32 = 24;

/// Everything needed to present one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Clear colour
    pub clear: [f32; 4],
    /// Triangle list, painted in order
    pub vertices: Vec<Vertex>,
    /// FPS overlay text, drawn at the top-left corner
    pub fps_label: Option<String>,
    /// Colour of the overlay text
    pub label_color: [f32; 4],
}

impl Frame {
    /// Build the draw list: missiles, then buildings, then explosions on top
    pub fn build(state: &GameState, fps: Option<u32>) -> Self {
        let mut vertices = Vec::new();

        for missile in &state.missiles {
            vertices.extend(shapes::line(
                missile.trail.start,
                missile.trail.end,
                TRAIL_THICKNESS,
                missile.trail.tint.to_array(),
            ));
            vertices.extend(shapes::circle(
                missile.head(),
                MISSILE_MARKER_RADIUS,
                colors::MISSILE_HEAD.to_array(),
                CIRCLE_SEGMENTS,
            ));
        }

        for building in &state.buildings {
            let rect = &building.rect;
            vertices.extend(shapes::rect(
                rect.origin,
                rect.width,
                rect.height,
                rect.tint.to_array(),
            ));
        }

        for explosion in &state.explosions {
            let blast = &explosion.blast;
            vertices.extend(shapes::circle(
                blast.center,
                blast.radius,
                blast.tint.to_array(),
                CIRCLE_SEGMENTS,
            ));
        }

        Self {
            clear: colors::BACKGROUND.to_array(),
            vertices,
            fps_label: fps.map(|fps| format!("{fps} FPS")),
            label_color: colors::HUD_TEXT.to_array(),
        }
    }

    /// Raw vertex bytes for a GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
