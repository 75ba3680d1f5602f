//! Data-driven game balance
//!
//! Everything that controls "feel" lives here so it can be overridden from a
//! JSON blob without recompiling. World geometry stays in `consts` - those
//! numbers are structural, not tunable.

use serde::{Deserialize, Serialize};

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Steering acceleration (units/s²)
    pub accel: f32,
    /// Damping base, in (0, 1); velocity *= base^(dt * damping_rate)
    pub damping_base: f32,
    /// Damping rate (per second); 60.0 matches a per-frame decay at 60 Hz
    pub damping_rate: f32,
    /// Maximum player speed (units/s)
    pub max_speed: f32,
    /// Velocity multiplier applied when the player is pushed back off the wall
    pub wall_damping: f32,

    // === Scoring ===
    /// Points granted per collected pickup
    pub pickup_reward: u32,
    /// Points removed per hazard contact (score floors at zero)
    pub hazard_penalty: u32,

    // === Collision envelopes ===
    /// Extra reach added to the player radius for pickup tests
    pub pickup_padding: f32,
    /// Extra reach for hazard tests; larger than pickups to match hazard size
    pub hazard_padding: f32,

    // === Population ===
    /// Pickup count topped up at session start
    pub min_pickups: usize,
    /// Hazards spawned once at session start
    pub hazard_count: usize,
    /// Seconds between collecting a pickup and its replacement appearing
    pub respawn_delay: f32,

    // === Camera shake ===
    /// Jitter amplitude on hazard contact
    pub shake_amount: f32,
    /// Shake duration in seconds
    pub shake_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel: 40.0,
            damping_base: 0.92,
            damping_rate: 60.0,
            max_speed: 14.0,
            wall_damping: 0.5,
            pickup_reward: 10,
            hazard_penalty: 20,
            pickup_padding: 0.6,
            hazard_padding: 1.1,
            min_pickups: 8,
            hazard_count: 5,
            respawn_delay: 1.2,
            shake_amount: 0.4,
            shake_duration: 0.35,
        }
    }
}

impl Tuning {
    /// Parse a tuning override blob. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for editing/inspection.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
