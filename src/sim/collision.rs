//! Collision detection and response
//!
//! Sphere-sphere tests of the player against every pickup and every hazard,
//! each frame, with no early exit - simultaneous contacts are legal and each
//! fires its own response. Pickups are consumed and respawned later; hazards
//! penalize and send the player back to the center.

use glam::Vec3;

use super::state::{GameEvent, GameSession};

/// Squared-distance sphere overlap test
#[inline]
fn within(a: Vec3, b: Vec3, reach: f32) -> bool {
    a.distance_squared(b) < reach * reach
}

/// Run both collision classes for the current frame, mutating the session
/// and queueing events. The player position is snapshotted up front so a
/// hazard reset mid-frame doesn't hide other contacts that were already
/// overlapping this frame.
pub fn resolve(session: &mut GameSession) {
    let player_pos = session.player.pos;

    // Pickups: mark-and-sweep. Collect ids first, then remove, so we never
    // mutate the vec while scanning it.
    let pickup_reach = session.player.radius + session.tuning.pickup_padding;
    let collected: Vec<u32> = session
        .pickups
        .iter()
        .filter(|p| within(p.pos, player_pos, pickup_reach))
        .map(|p| p.id)
        .collect();

    for pickup_id in collected {
        session.pickups.retain(|p| p.id != pickup_id);
        session.score += session.tuning.pickup_reward;
        session.schedule_respawn();
        session.events.push(GameEvent::Collected {
            pickup_id,
            score: session.score,
        });
        log::debug!("collected pickup {pickup_id}, score {}", session.score);
    }

    // Hazards have a larger collision envelope than pickups. Every
    // overlapping hazard fires: resets are idempotent, penalties stack.
    let hazard_reach = session.player.radius + session.tuning.hazard_padding;
    let hits = session
        .hazards
        .iter()
        .filter(|h| within(h.pos, player_pos, hazard_reach))
        .count();

    for _ in 0..hits {
        session.player.reset();
        session.score = session.score.saturating_sub(session.tuning.hazard_penalty);
        session.events.push(GameEvent::HazardHit {
            score: session.score,
        });
        log::debug!("hazard hit, score {}", session.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_RADIUS;
    use crate::sim::state::Pickup;

    fn session_with_pickup_at(pos: Vec3) -> GameSession {
        let mut session = GameSession::new(5);
        session.start();
        // Uncached hazard positions default to the origin, right on top of
        // the freshly spawned player; drop them so only pickups are in play
        session.hazards.clear();
        session.pickups.clear();
        session.pending_respawns.clear();
        let id = session.next_entity_id();
        session.pickups.push(Pickup { id, pos });
        session.drain_events();
        session
    }

    fn hazard_at(session: &mut GameSession, pos: Vec3) {
        let id = session.next_entity_id();
        session.hazards.push(crate::sim::state::Hazard {
            id,
            phase: 0.0,
            orbit_radius: 10.0,
            speed: 1.0,
            pos,
            yaw: 0.0,
        });
    }

    #[test]
    fn test_pickup_at_player_is_collected() {
        let mut session = session_with_pickup_at(Vec3::new(0.0, PLAYER_RADIUS, 0.0));
        resolve(&mut session);

        assert!(session.pickups.is_empty());
        assert_eq!(session.score, session.tuning.pickup_reward);
        let events = session.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Collected { .. }));
        // Replacement is scheduled, not spawned inline
        assert_eq!(session.pending_respawns.len(), 1);
    }

    #[test]
    fn test_distant_pickup_survives() {
        let mut session = session_with_pickup_at(Vec3::new(10.0, 0.6, 0.0));
        resolve(&mut session);
        assert_eq!(session.pickups.len(), 1);
        assert_eq!(session.score, 0);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_two_overlapping_pickups_both_collected() {
        let mut session = session_with_pickup_at(Vec3::new(0.0, 0.6, 0.5));
        let id = session.next_entity_id();
        session.pickups.push(Pickup {
            id,
            pos: Vec3::new(0.5, 0.6, 0.0),
        });
        resolve(&mut session);

        assert!(session.pickups.is_empty());
        assert_eq!(session.score, 2 * session.tuning.pickup_reward);
        assert_eq!(session.drain_events().len(), 2);
        assert_eq!(session.pending_respawns.len(), 2);
    }

    #[test]
    fn test_hazard_hit_resets_and_penalizes() {
        let mut session = GameSession::new(5);
        session.start();
        session.pickups.clear();
        session.score = 50;
        session.player.pos = Vec3::new(4.0, PLAYER_RADIUS, 3.0);
        session.player.vel = Vec3::new(6.0, 0.0, 0.0);
        session.hazards.truncate(1);
        session.hazards[0].pos = session.player.pos;
        session.drain_events();

        resolve(&mut session);

        assert_eq!(session.player.pos, Vec3::new(0.0, PLAYER_RADIUS, 0.0));
        assert_eq!(session.player.vel, Vec3::ZERO);
        assert_eq!(session.score, 50 - session.tuning.hazard_penalty);
        let events = session.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::HazardHit { .. }));
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let mut session = GameSession::new(5);
        session.start();
        session.pickups.clear();
        session.score = 15; // penalty is 20
        session.hazards.truncate(1);
        session.hazards[0].pos = session.player.pos;

        resolve(&mut session);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_two_hazards_same_frame_both_fire() {
        let mut session = GameSession::new(5);
        session.start();
        session.pickups.clear();
        session.score = 100;
        session.hazards.truncate(2);
        session.hazards[0].pos = session.player.pos;
        session.hazards[1].pos = session.player.pos + Vec3::new(0.3, 0.0, 0.0);
        session.drain_events();

        resolve(&mut session);

        let events = session.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(session.score, 100 - 2 * session.tuning.hazard_penalty);
        assert_eq!(session.player.pos, Vec3::new(0.0, PLAYER_RADIUS, 0.0));
        assert_eq!(session.player.vel, Vec3::ZERO);
    }

    #[test]
    fn test_hazard_envelope_wider_than_pickup() {
        // A gap that pickups miss but hazards reach
        let tuning = crate::Tuning::default();
        let gap = PLAYER_RADIUS + (tuning.pickup_padding + tuning.hazard_padding) / 2.0;

        let mut session = session_with_pickup_at(Vec3::new(gap, PLAYER_RADIUS, 0.0));
        hazard_at(&mut session, Vec3::new(gap, PLAYER_RADIUS, 0.0));
        session.score = 100;

        resolve(&mut session);

        assert_eq!(session.pickups.len(), 1, "pickup out of reach");
        assert_eq!(session.score, 100 - session.tuning.hazard_penalty);
    }
}
