//! Collision resolution between missiles, buildings and explosions
//!
//! One pass over the missiles. Each missile is checked, in order, for
//! arrival at its target, for hitting a building, and for flying into an
//! explosion. The first check that fires removes the missile and skips the
//! rest. Removal compacts the list in place and keeps survivor order.

use serde::{Deserialize, Serialize};

use super::state::{Allegiance, Building, Explosion, GameEvent, Missile};

/// Knobs for the collision pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionRules {
    /// Building checks only run for heads below this Y (None = always)
    pub building_threshold: Option<f32>,
    /// Arrival distance; 0 means exact equality with the target
    pub arrival_tolerance: f32,
}

/// Resolve every collision for this frame.
///
/// Explosions spawned by arrivals earlier in the pass already intercept the
/// missiles checked after them.
pub fn apply_collisions(
    missiles: &mut Vec<Missile>,
    buildings: &mut Vec<Building>,
    explosions: &mut Vec<Explosion>,
    rules: &CollisionRules,
    events: &mut Vec<GameEvent>,
) {
    missiles.retain(|missile| !resolve_missile(missile, buildings, explosions, rules, events));
}

/// Returns true when the missile is destroyed
fn resolve_missile(
    missile: &Missile,
    buildings: &mut Vec<Building>,
    explosions: &mut Vec<Explosion>,
    rules: &CollisionRules,
    events: &mut Vec<GameEvent>,
) -> bool {
    let head = missile.head();

    if missile.has_arrived(rules.arrival_tolerance) {
        if missile.allegiance == Allegiance::Friendly {
            explosions.push(Explosion::new(head));
        }
        log::debug!("{:?} missile arrived at {:?}", missile.allegiance, head);
        events.push(GameEvent::MissileArrived {
            allegiance: missile.allegiance,
            at: head,
        });
        return true;
    }

    let below_threshold = rules.building_threshold.is_none_or(|y| head.y > y);
    if missile.is_hostile() && below_threshold {
        if let Some(index) = buildings.iter().position(|b| b.rect.contains_point(head)) {
            let building = buildings.remove(index);
            log::info!(
                "Building at {:?} destroyed, {} left",
                building.rect.origin,
                buildings.len()
            );
            events.push(GameEvent::BuildingDestroyed {
                at: building.rect.origin,
            });
            return true;
        }
    }

    if explosions.iter().any(|e| e.contains_point(head)) {
        log::debug!("{:?} missile intercepted at {:?}", missile.allegiance, head);
        events.push(GameEvent::MissileIntercepted {
            allegiance: missile.allegiance,
            at: head,
        });
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EXPLOSION_MIN_RADIUS;
    use crate::sim::geometry::{Rect, Tint};
    use crate::sim::spawner::spawn_player_missile;
    use glam::Vec2;

    const GATED: CollisionRules = CollisionRules {
        building_threshold: Some(370.0),
        arrival_tolerance: 0.0,
    };

    fn building_at(x: f32) -> Building {
        Building {
            rect: Rect::new(Vec2::new(x, 370.0), 80.0, 80.0, Tint::GRAY),
        }
    }

    fn hostile_with_head(head: Vec2) -> Missile {
        let mut missile = Missile::new(
            Vec2::new(head.x, 0.0),
            Vec2::new(head.x, 450.0),
            0.01,
            Allegiance::Hostile,
            Tint::RED,
        );
        missile.trail.end = head;
        missile
    }

    fn friendly_with_head(head: Vec2, target: Vec2) -> Missile {
        let mut missile = spawn_player_missile(Vec2::new(50.0, 400.0), target, 1.0);
        missile.trail.end = head;
        missile
    }

    #[test]
    fn test_hostile_hits_building() {
        let mut missiles = vec![hostile_with_head(Vec2::new(60.0, 400.0))];
        let mut buildings = vec![building_at(20.0), building_at(360.0)];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(missiles.is_empty());
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].rect.origin.x, 360.0);
        assert_eq!(
            events,
            vec![GameEvent::BuildingDestroyed {
                at: Vec2::new(20.0, 370.0)
            }]
        );
    }

    #[test]
    fn test_no_overlap_removes_nothing() {
        let mut missiles = vec![
            hostile_with_head(Vec2::new(200.0, 400.0)),
            hostile_with_head(Vec2::new(60.0, 100.0)),
        ];
        let mut buildings = vec![building_at(20.0)];
        let mut explosions = vec![Explosion::new(Vec2::new(600.0, 100.0))];
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert_eq!(missiles.len(), 2);
        assert_eq!(buildings.len(), 1);
        assert_eq!(explosions.len(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_friendly_missile_ignores_buildings() {
        let mut missiles = vec![friendly_with_head(Vec2::new(60.0, 400.0), Vec2::new(60.0, 10.0))];
        let mut buildings = vec![building_at(20.0)];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert_eq!(missiles.len(), 1);
        assert_eq!(buildings.len(), 1);
    }

    #[test]
    fn test_building_checks_gated_by_threshold() {
        // Head is inside a building that reaches above the threshold
        let tall = Building {
            rect: Rect::new(Vec2::new(20.0, 300.0), 80.0, 150.0, Tint::GRAY),
        };
        let mut missiles = vec![hostile_with_head(Vec2::new(60.0, 320.0))];
        let mut buildings = vec![tall];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);
        assert_eq!(missiles.len(), 1);
        assert_eq!(buildings.len(), 1);

        let ungated = CollisionRules {
            building_threshold: None,
            ..GATED
        };
        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &ungated, &mut events);
        assert!(missiles.is_empty());
        assert!(buildings.is_empty());
    }

    #[test]
    fn test_friendly_arrival_spawns_one_explosion() {
        let target = Vec2::new(300.0, 150.0);
        let mut missiles = vec![friendly_with_head(target, target)];
        let mut buildings = vec![building_at(20.0)];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(missiles.is_empty());
        assert_eq!(explosions.len(), 1);
        assert_eq!(explosions[0].blast.center, target);
        assert_eq!(explosions[0].blast.radius, EXPLOSION_MIN_RADIUS);
        assert_eq!(
            events,
            vec![GameEvent::MissileArrived {
                allegiance: Allegiance::Friendly,
                at: target
            }]
        );
    }

    #[test]
    fn test_hostile_arrival_on_building_counts_as_arrival() {
        // Ground-level target inside a building: arrival wins, building stays
        let head = Vec2::new(60.0, 440.0);
        let mut missiles = vec![hostile_with_head(head)];
        missiles[0].target = head;
        let mut buildings = vec![building_at(20.0)];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(missiles.is_empty());
        assert_eq!(buildings.len(), 1);
        assert!(explosions.is_empty());
    }

    #[test]
    fn test_explosion_intercepts_any_missile() {
        let mut missiles = vec![
            hostile_with_head(Vec2::new(400.0, 100.0)),
            friendly_with_head(Vec2::new(404.0, 100.0), Vec2::new(600.0, 50.0)),
        ];
        let mut buildings = Vec::new();
        let mut explosions = vec![Explosion::new(Vec2::new(400.0, 100.0))];
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(missiles.is_empty());
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| matches!(e, GameEvent::MissileIntercepted { .. })));
    }

    #[test]
    fn test_fresh_explosion_intercepts_later_missiles() {
        let target = Vec2::new(300.0, 150.0);
        let mut missiles = vec![
            friendly_with_head(target, target),
            hostile_with_head(Vec2::new(302.0, 151.0)),
            hostile_with_head(Vec2::new(500.0, 151.0)),
        ];
        let mut buildings = vec![building_at(20.0)];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert_eq!(missiles.len(), 1);
        assert_eq!(missiles[0].head(), Vec2::new(500.0, 151.0));
        assert_eq!(explosions.len(), 1);
    }

    #[test]
    fn test_building_hit_skips_explosion_check() {
        // Head inside both a building and an explosion: the building takes it
        let head = Vec2::new(60.0, 400.0);
        let mut missiles = vec![hostile_with_head(head)];
        let mut buildings = vec![building_at(20.0)];
        let mut explosions = vec![Explosion::new(head)];
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(missiles.is_empty());
        assert!(buildings.is_empty());
        assert_eq!(
            events,
            vec![GameEvent::BuildingDestroyed {
                at: Vec2::new(20.0, 370.0)
            }]
        );
        assert_eq!(explosions.len(), 1);
        assert_eq!(explosions[0].blast.radius, EXPLOSION_MIN_RADIUS);
    }

    #[test]
    fn test_fading_explosion_still_intercepts() {
        let mut explosion = Explosion::new(Vec2::new(400.0, 100.0));
        explosion.blast.radius = EXPLOSION_MIN_RADIUS - 1.0;
        let mut missiles = vec![hostile_with_head(Vec2::new(403.5, 100.0))];
        let mut buildings = Vec::new();
        let mut explosions = vec![explosion];
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(missiles.is_empty());
        assert!(matches!(events[..], [GameEvent::MissileIntercepted { .. }]));
    }

    #[test]
    fn test_one_building_per_missile() {
        // Two overlapping buildings, one missile: only one building goes
        let mut missiles = vec![hostile_with_head(Vec2::new(60.0, 400.0))];
        let mut buildings = vec![building_at(20.0), building_at(40.0)];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(missiles.is_empty());
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].rect.origin.x, 40.0);
    }

    #[test]
    fn test_exhausting_buildings_mid_pass() {
        let mut missiles = vec![
            hostile_with_head(Vec2::new(60.0, 400.0)),
            hostile_with_head(Vec2::new(61.0, 401.0)),
            hostile_with_head(Vec2::new(62.0, 402.0)),
        ];
        let mut buildings = vec![building_at(20.0)];
        let mut explosions = Vec::new();
        let mut events = Vec::new();

        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);

        assert!(buildings.is_empty());
        assert_eq!(missiles.len(), 2);
    }

    #[test]
    fn test_empty_collections_are_noops() {
        let mut missiles = Vec::new();
        let mut buildings = Vec::new();
        let mut explosions = Vec::new();
        let mut events = Vec::new();
        apply_collisions(&mut missiles, &mut buildings, &mut explosions, &GATED, &mut events);
        assert!(missiles.is_empty() && buildings.is_empty() && explosions.is_empty());
        assert!(events.is_empty());
    }
}
