//! Per-frame driver
//!
//! The host's frame scheduler calls `tick` once per display refresh with the
//! elapsed wall-clock delta. The driver clamps the delta, then runs the frame
//! stages in a fixed order: motion, hazard kinematics, due respawn timers,
//! collision resolution, camera. Ordering matters - collisions must see this
//! frame's positions, and the camera must see the post-collision player.

use glam::Vec2;

use super::state::{GameEvent, GameSession, SessionPhase};
use super::{collision, hazard, motion};
use crate::consts::MAX_FRAME_DT;

/// Held-direction state for one frame. The input collaborator refreshes this
/// asynchronously; the simulation samples whatever is held right now - no
/// buffering or event replay. Opposing directions cancel to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Signed unit contributions: x is lateral (+right), y is longitudinal
    /// (+forward), each in {-1, 0, +1}
    pub fn axes(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f32,
            (self.forward as i32 - self.back as i32) as f32,
        )
    }
}

/// Advance the session by one frame. A no-op until `start` has been called;
/// the host stops the loop simply by not calling this again.
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    if session.phase != SessionPhase::Running {
        return;
    }

    // Tab stalls and resumes hand us huge deltas; clamp so one frame can't
    // tunnel the player through the wall or a hazard.
    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    session.elapsed += dt;

    let camera_forward = session.camera.forward();
    motion::advance(
        &mut session.player,
        dt,
        input.axes(),
        camera_forward,
        &session.tuning,
    );

    hazard::advance_hazards(&mut session.hazards, session.elapsed);

    process_respawns(session);

    let events_before = session.events.len();
    collision::resolve(session);
    let hazard_hit = session.events[events_before..]
        .iter()
        .any(|e| matches!(e, GameEvent::HazardHit { .. }));
    if hazard_hit {
        session
            .camera
            .start_shake(session.tuning.shake_amount, session.tuning.shake_duration);
    }

    let player_pos = session.player.pos;
    session.camera.update(player_pos, dt, &mut session.rng);
}

/// Spawn replacements whose timers have come due. Timers from a previous
/// session generation are dropped unfired - a restart must not let an old
/// callback resurrect itself into fresh state.
fn process_respawns(session: &mut GameSession) {
    let now = session.elapsed;
    let generation = session.generation;

    let mut due = 0;
    session.pending_respawns.retain(|timer| {
        if timer.generation != generation {
            return false;
        }
        if timer.due_at <= now {
            due += 1;
            return false;
        }
        true
    });

    for _ in 0..due {
        session.spawn_pickup();
    }
}
