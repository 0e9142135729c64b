//! Headless platform
//!
//! No window: clicks come from a script keyed by frame number, frame time is
//! fixed, and presented frames are only counted. Drives the native binary
//! and the integration tests.

use std::collections::BTreeMap;

use glam::Vec2;

use super::Platform;
use crate::renderer::Frame;

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    /// Close after this many presented frames
    frame_budget: u64,
    frame_time: f32,
    /// Scripted clicks: frame number -> pointer position
    clicks: BTreeMap<u64, Vec2>,
    pointer: Vec2,
    /// Frames presented so far
    pub presented: u64,
    pub last_triangle_count: usize,
    pub last_fps_label: Option<String>,
}

impl HeadlessPlatform {
    pub fn new(frame_budget: u64, frame_time: f32) -> Self {
        Self {
            frame_budget,
            frame_time,
            clicks: BTreeMap::new(),
            pointer: Vec2::ZERO,
            presented: 0,
            last_triangle_count: 0,
            last_fps_label: None,
        }
    }

    /// Click at `pointer` on frame `frame` (0-based)
    pub fn click_at(mut self, frame: u64, pointer: Vec2) -> Self {
        self.clicks.insert(frame, pointer);
        self
    }

    /// Click every `every` frames, cycling through `targets`
    pub fn with_volleys(mut self, every: u64, targets: &[Vec2]) -> Self {
        if every == 0 || targets.is_empty() {
            return self;
        }
        for (n, frame) in (every..self.frame_budget).step_by(every as usize).enumerate() {
            self.clicks.insert(frame, targets[n % targets.len()]);
        }
        self
    }

    pub fn scripted_clicks(&self) -> usize {
        self.clicks.len()
    }
}

impl Platform for HeadlessPlatform {
    fn should_close(&self) -> bool {
        self.presented >= self.frame_budget
    }

    fn pointer_pressed(&mut self) -> bool {
        match self.clicks.get(&self.presented) {
            Some(&pointer) => {
                self.pointer = pointer;
                true
            }
            None => false,
        }
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        self.last_triangle_count = frame.triangle_count();
        self.last_fps_label = frame.fps_label.clone();
    }
}
