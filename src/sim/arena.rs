//! Arena geometry helpers
//!
//! The world is a flat disc of radius `WORLD_RADIUS` centered at the origin,
//! ground plane at y = 0. Spawn placement samples the inner portion of the
//! disc so pickups never sit against the wall.

use glam::Vec3;
use rand::Rng;

use crate::consts::*;
use crate::horizontal_distance;

/// Sample a pickup spawn point: uniform direction, radius up to
/// `PICKUP_SPAWN_FACTOR * WORLD_RADIUS`, floating at pickup height.
pub fn random_spawn_point<R: Rng>(rng: &mut R) -> Vec3 {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let radius = rng.random_range(0.0..WORLD_RADIUS * PICKUP_SPAWN_FACTOR);
    Vec3::new(angle.cos() * radius, PICKUP_HEIGHT, angle.sin() * radius)
}

/// True if the point is inside the arena boundary circle (ground-plane test)
pub fn contains(pos: Vec3) -> bool {
    horizontal_distance(pos) <= WORLD_RADIUS
}
