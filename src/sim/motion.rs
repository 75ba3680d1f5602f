//! Player motion: camera-relative steering, integration, containment, roll
//!
//! Point-mass kinematics only. Forces come from held directions rotated into
//! the camera's ground-plane frame; drag is an exponential decay so the feel
//! is identical at any frame rate.

use glam::{Quat, Vec2, Vec3};

use super::state::Player;
use crate::consts::WORLD_RADIUS;
use crate::{Tuning, ground_direction, horizontal_distance};

/// Below this travel distance per frame the roll axis is numerically
/// unstable, so the orientation update is skipped.
const ROLL_EPSILON: f32 = 1e-4;

/// Advance the player by one frame.
///
/// `axes` holds the combined held-direction contributions: `x` is lateral
/// (+right/-left), `y` is longitudinal (+forward/-back), each in {-1, 0, +1}.
/// `camera_forward` is the camera's heading; only its ground-plane component
/// matters. Total over all numeric inputs - a degenerate (vertical or zero)
/// camera heading steers nowhere rather than failing.
pub fn advance(player: &mut Player, dt: f32, axes: Vec2, camera_forward: Vec3, tuning: &Tuning) {
    let forward = ground_direction(camera_forward);
    // Right-handed frame on the ground plane; zero when forward is degenerate
    let right = forward.cross(Vec3::Y);

    let force = (forward * axes.y + right * axes.x) * tuning.accel;
    player.vel += force * dt;

    // Frame-rate-independent drag
    player.vel *= tuning.damping_base.powf(dt * tuning.damping_rate);

    let speed = player.vel.length();
    if speed > tuning.max_speed {
        player.vel *= tuning.max_speed / speed;
    }

    player.pos += player.vel * dt;
    player.pos.y = player.radius;

    // Containment runs strictly after free movement: pull the player back
    // onto the boundary circle and bleed speed, a soft wall rather than a
    // hard stop.
    let dist = horizontal_distance(player.pos);
    if dist > WORLD_RADIUS {
        let scale = WORLD_RADIUS / dist;
        player.pos.x *= scale;
        player.pos.z *= scale;
        player.vel *= tuning.wall_damping;
    }

    roll(player, dt);
}

/// Accumulate visual roll: a sphere travelling distance d rotates d/r radians
/// about the axis perpendicular to world-up and its velocity.
fn roll(player: &mut Player, dt: f32) {
    let travel = player.vel.length() * dt;
    if travel < ROLL_EPSILON {
        return;
    }
    let axis = Vec3::Y.cross(player.vel).normalize_or_zero();
    if axis == Vec3::ZERO {
        return;
    }
    let angle = travel / player.radius;
    player.orientation = (Quat::from_axis_angle(axis, angle) * player.orientation).normalize();
}
