//! Geometry primitives shared by all entities
//!
//! Screen space: origin at the top-left corner, +Y pointing down.
//! - `Segment`: a line from a fixed start to a moving end
//! - `Circle`: center + radius
//! - `Rect`: axis-aligned, anchored at its top-left corner

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA8 colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const GREEN: Tint = Tint::rgb(0, 228, 48);
    pub const RED: Tint = Tint::rgb(230, 41, 55);
    pub const GRAY: Tint = Tint::rgb(130, 130, 130);
    pub const LIGHTGRAY: Tint = Tint::rgb(200, 200, 200);
    pub const RAYWHITE: Tint = Tint::rgb(245, 245, 245);
    pub const DARKGRAY: Tint = Tint::rgb(80, 80, 80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized colour for vertex data
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// A line segment whose end point moves while the start stays fixed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub tint: Tint,
}

impl Segment {
    /// A zero-length segment at `origin`
    pub fn at(origin: Vec2, tint: Tint) -> Self {
        Self {
            start: origin,
            end: origin,
            tint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub tint: Tint,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, tint: Tint) -> Self {
        Self {
            center,
            radius,
            tint,
        }
    }

    /// Inclusive containment: a point on the rim counts as inside
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    pub tint: Tint,
}

impl Rect {
    pub fn new(origin: Vec2, width: f32, height: f32, tint: Tint) -> Self {
        Self {
            origin,
            width,
            height,
            tint,
        }
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.height
    }
}
