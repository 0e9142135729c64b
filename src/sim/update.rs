//! Per-frame entity motion
//!
//! Missiles step toward their targets; explosions pulse and fade. Faded
//! explosions are compacted out in the same pass, keeping survivor order.

use super::state::{Explosion, GameEvent, Missile};

/// Advance every missile head by one frame
pub fn update_missiles(missiles: &mut [Missile]) {
    for missile in missiles.iter_mut() {
        missile.advance();
    }
}

/// Pulse every explosion, dropping the ones that have faded out
pub fn update_explosions(explosions: &mut Vec<Explosion>, events: &mut Vec<GameEvent>) {
    explosions.retain_mut(|explosion| {
        let alive = explosion.step();
        if !alive {
            log::debug!("Explosion at {:?} faded", explosion.blast.center);
            events.push(GameEvent::ExplosionFaded {
                at: explosion.blast.center,
            });
        }
        alive
    });
}
