//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Tint;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Tint;

    pub const BACKGROUND: Tint = Tint::RAYWHITE;
    /// Marker drawn at every missile head regardless of side
    pub const MISSILE_HEAD: Tint = Tint::RED;
    pub const HUD_TEXT: Tint = Tint::DARKGRAY;
}
