//! Orb Roller - a top-down arena collection game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, hazards, collisions, session state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing, and raw input capture are host concerns. The host
//! feeds `sim::tick` a clamped delta-time and the held-direction state each
//! frame and reads entity positions back for drawing.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec3;

/// World geometry and frame constants
pub mod consts {
    use glam::Vec3;

    /// Radius of the circular arena
    pub const WORLD_RADIUS: f32 = 24.0;
    /// Player sphere radius (also its resting height above the ground plane)
    pub const PLAYER_RADIUS: f32 = 1.0;
    /// Height at which pickups float above the ground
    pub const PICKUP_HEIGHT: f32 = 0.6;
    /// Pickups spawn within this fraction of the arena radius
    pub const PICKUP_SPAWN_FACTOR: f32 = 0.6;

    /// Hazard orbit radius range
    pub const HAZARD_ORBIT_MIN: f32 = 6.0;
    pub const HAZARD_ORBIT_MAX: f32 = 16.0;
    /// Hazard angular speed range (radians per second)
    pub const HAZARD_SPEED_MIN: f32 = 0.6;
    pub const HAZARD_SPEED_MAX: f32 = 1.4;
    /// Hazard bobbing: height oscillates in [base - amp, base + amp]
    pub const HAZARD_BASE_HEIGHT: f32 = 1.0;
    pub const HAZARD_BOB_AMPLITUDE: f32 = 0.5;

    /// Maximum simulation step; larger host deltas are clamped to this
    /// so a backgrounded tab can't tunnel the player through geometry.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Camera follow offset from the player (up and behind along +Z)
    pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 6.5, 11.0);
    /// Look-at point sits this far above the player center
    pub const CAMERA_LOOK_HEIGHT: f32 = 1.2;
    /// Per-call follow blend factor (not dt-scaled; see CameraRig docs)
    pub const CAMERA_LERP: f32 = 0.08;
}

/// Project a vector onto the ground plane (y = 0) and normalize.
/// Returns the zero vector for inputs with no horizontal component.
#[inline]
pub fn ground_direction(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// Distance from the arena center, measured on the ground plane.
#[inline]
pub fn horizontal_distance(pos: Vec3) -> f32 {
    (pos.x * pos.x + pos.z * pos.z).sqrt()
}
