//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Host-driven frame steps only (`tick` with an externally supplied delta)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Frame order: input sampling -> player motion -> hazard kinematics ->
//! due respawn timers -> collision resolution -> camera.

pub mod arena;
pub mod camera;
pub mod collision;
pub mod hazard;
pub mod motion;
pub mod state;
pub mod tick;

pub use camera::CameraRig;
pub use hazard::{advance_hazards, orbit_position, orbit_yaw};
pub use state::{GameEvent, GameSession, Hazard, Pickup, Player, SessionPhase};
pub use tick::{TickInput, tick};
