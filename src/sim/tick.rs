//! Frame step
//!
//! Core game loop that advances the simulation by one presented frame.
//! Order: input -> spawns -> motion -> collisions -> overrun check.

use glam::Vec2;

use super::collision::apply_collisions;
use super::spawner::{spawn_enemy_missile, spawn_player_missile};
use super::state::{GameEvent, GamePhase, GameState, Missile};
use super::update::{update_explosions, update_missiles};

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer was pressed this frame (edge, not level)
    pub fire: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
}

impl TickInput {
    /// A click at `pointer`
    pub fn fire_at(pointer: Vec2) -> Self {
        Self {
            fire: true,
            pointer,
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Overrun {
        return;
    }

    state.events.clear();
    state.frame += 1;

    if input.fire {
        let missile = spawn_player_missile(state.launcher, input.pointer, state.player_missile_speed);
        launch(state, missile);
    }

    if state.spawn_timer.advance() {
        let missile = spawn_enemy_missile(
            &mut state.rng,
            state.width,
            state.height,
            state.enemy_missile_speed,
        );
        launch(state, missile);
    }

    update_missiles(&mut state.missiles);
    update_explosions(&mut state.explosions, &mut state.events);

    apply_collisions(
        &mut state.missiles,
        &mut state.buildings,
        &mut state.explosions,
        &state.rules,
        &mut state.events,
    );

    if state.buildings.is_empty() {
        log::info!("All buildings destroyed after {} frames", state.frame);
        state.phase = GamePhase::Overrun;
    }
}

fn launch(state: &mut GameState, missile: Missile) {
    log::debug!(
        "{:?} missile launched from {:?} toward {:?}",
        missile.allegiance,
        missile.trail.start,
        missile.target
    );
    state.events.push(GameEvent::MissileLaunched {
        allegiance: missile.allegiance,
        origin: missile.trail.start,
    });
    state.missiles.push(missile);
}
