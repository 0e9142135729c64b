//! Platform abstraction layer
//!
//! The simulation never touches a window directly. A `Platform` supplies
//! input and frame timing, and presents the draw list built each frame.
//! `run` is the frame loop that ties them together.

pub mod fps;
pub mod headless;

pub use fps::FpsCounter;
pub use headless::HeadlessPlatform;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{Allegiance, GameEvent, GameState, TickInput, tick};

/// Window, input and presentation collaborator
pub trait Platform {
    /// Close requested (window closed, budget spent, ...)
    fn should_close(&self) -> bool;
    /// Primary button went down since the last frame
    fn pointer_pressed(&mut self) -> bool;
    /// Pointer position in screen space
    fn pointer_position(&self) -> Vec2;
    /// Seconds the previous frame took
    fn frame_time(&self) -> f32;
    /// Draw one frame
    fn present(&mut self, frame: &Frame);
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The platform asked to close
    Closed,
    /// Every building was destroyed
    Overrun,
}

/// What happened during a run.
///
/// The counters are run diagnostics tallied from `GameEvent`s. They are not
/// a score and nothing in the simulation reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub outcome: Outcome,
    pub buildings_remaining: usize,
    // Diagnostic counters
    pub player_launches: u32,
    pub enemy_launches: u32,
    pub buildings_destroyed: u32,
    pub interceptions: u32,
}

impl RunSummary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MissileLaunched {
                allegiance: Allegiance::Friendly,
                ..
            } => self.player_launches += 1,
            GameEvent::MissileLaunched {
                allegiance: Allegiance::Hostile,
                ..
            } => self.enemy_launches += 1,
            GameEvent::BuildingDestroyed { .. } => self.buildings_destroyed += 1,
            GameEvent::MissileIntercepted { .. } => self.interceptions += 1,
            GameEvent::MissileArrived { .. } | GameEvent::ExplosionFaded { .. } => {}
        }
    }
}

/// Run the frame loop until the platform closes or the city falls
pub fn run<P: Platform>(platform: &mut P, settings: &Settings) -> Result<RunSummary, SetupError> {
    let mut state = GameState::new(settings)?;
    let mut fps = FpsCounter::new();
    let mut summary = RunSummary {
        seed: state.seed,
        frames: 0,
        outcome: Outcome::Closed,
        buildings_remaining: state.buildings.len(),
        player_launches: 0,
        enemy_launches: 0,
        buildings_destroyed: 0,
        interceptions: 0,
    };

    summary.outcome = loop {
        if platform.should_close() {
            break Outcome::Closed;
        }

        let input = TickInput {
            fire: platform.pointer_pressed(),
            pointer: platform.pointer_position(),
        };
        tick(&mut state, &input);
        for event in state.drain_events() {
            summary.record(&event);
        }

        fps.record(platform.frame_time());
        let frame = Frame::build(&state, settings.show_fps.then(|| fps.fps()));
        platform.present(&frame);

        if state.is_overrun() {
            break Outcome::Overrun;
        }
    };

    summary.frames = state.frame;
    summary.buildings_remaining = state.buildings.len();
    log::info!(
        "Run ended ({:?}) after {} frames, {} buildings standing",
        summary.outcome,
        summary.frames,
        summary.buildings_remaining
    );

    Ok(summary)
}
