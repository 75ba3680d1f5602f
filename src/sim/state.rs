//! Session state and core simulation types
//!
//! Everything mutable lives on `GameSession` - no ambient globals. The host
//! owns the session, calls `tick` on it each frame, and drains events after.

use glam::{Quat, Vec3};
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::arena;
use super::camera::CameraRig;
use crate::Tuning;
use crate::consts::*;

/// Whether the simulation loop advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the start command; `tick` is a no-op
    NotStarted,
    /// Active gameplay; loops until the host tears the session down
    Running,
}

/// Notifications for the UI/audio collaborators, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pickup was consumed; carries the score after the reward
    Collected { pickup_id: u32, score: u32 },
    /// The player touched a hazard; carries the score after the penalty
    HazardHit { score: u32 },
}

/// The player-controlled sphere
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3,
    /// Owned by the motion step; collision resets zero it directly
    pub vel: Vec3,
    /// Fixed at creation; also the resting height above the ground
    pub radius: f32,
    /// Visual roll accumulated from travel, cosmetic only
    pub orientation: Quat,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, PLAYER_RADIUS, 0.0),
            vel: Vec3::ZERO,
            radius: PLAYER_RADIUS,
            orientation: Quat::IDENTITY,
        }
    }

    /// Snap back to the arena center with no motion (session start, hazard hit)
    pub fn reset(&mut self) {
        self.pos = Vec3::new(0.0, self.radius, 0.0);
        self.vel = Vec3::ZERO;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A stationary collectible
#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec3,
}

/// An orbiting threat. Position is derived from elapsed time, never
/// integrated - `pos`/`yaw` are just the cache written by the kinematics
/// step for collision tests and rendering.
#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: u32,
    /// Angular offset of the orbit (radians)
    pub phase: f32,
    /// Orbit circle radius, in [HAZARD_ORBIT_MIN, HAZARD_ORBIT_MAX]
    pub orbit_radius: f32,
    /// Angular speed, in [HAZARD_SPEED_MIN, HAZARD_SPEED_MAX]
    pub speed: f32,
    pub pos: Vec3,
    pub yaw: f32,
}

/// A collected pickup's replacement, due at a future session time.
/// The generation tag makes timers scheduled before a restart inert.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingRespawn {
    pub due_at: f32,
    pub generation: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed for reproducible spawn placement and shake jitter
    pub seed: u64,
    pub phase: SessionPhase,
    /// Non-negative; penalties saturate at zero
    pub score: u32,
    /// Seconds since the session start baseline
    pub elapsed: f32,
    pub player: Player,
    pub pickups: Vec<Pickup>,
    pub hazards: Vec<Hazard>,
    pub camera: CameraRig,
    pub tuning: Tuning,
    pub(crate) pending_respawns: Vec<PendingRespawn>,
    pub(crate) generation: u32,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameSession {
    /// Create a session with default tuning. Hazards are spawned here and
    /// persist for the session lifetime; pickups arrive on `start`.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut session = Self {
            seed,
            phase: SessionPhase::NotStarted,
            score: 0,
            elapsed: 0.0,
            player: Player::new(),
            pickups: Vec::new(),
            hazards: Vec::new(),
            camera: CameraRig::new(),
            tuning,
            pending_respawns: Vec::new(),
            generation: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        for _ in 0..session.tuning.hazard_count {
            session.spawn_hazard();
        }

        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// NotStarted -> Running. Resets score, player, and the time baseline,
    /// tops pickups up to the minimum, and invalidates outstanding respawn
    /// timers. Calling it while already running is a no-op.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Running {
            return;
        }
        self.begin_run();
    }

    /// Force a fresh run even if one is in flight (host "play again" path).
    pub fn restart(&mut self) {
        self.begin_run();
    }

    fn begin_run(&mut self) {
        self.phase = SessionPhase::Running;
        self.score = 0;
        self.elapsed = 0.0;
        self.player.reset();
        self.generation += 1;
        self.pending_respawns.clear();
        self.events.clear();
        self.camera.cancel_shake();

        while self.pickups.len() < self.tuning.min_pickups {
            self.spawn_pickup();
        }

        log::info!(
            "session started (seed {}, {} pickups, {} hazards)",
            self.seed,
            self.pickups.len(),
            self.hazards.len()
        );
    }

    /// Place a new pickup at a sampled point in the inner arena
    pub fn spawn_pickup(&mut self) {
        let id = self.next_entity_id();
        let pos = arena::random_spawn_point(&mut self.rng);
        self.pickups.push(Pickup { id, pos });
    }

    fn spawn_hazard(&mut self) {
        let id = self.next_entity_id();
        let phase = self.rng.random_range(0.0..std::f32::consts::TAU);
        let orbit_radius = self.rng.random_range(HAZARD_ORBIT_MIN..HAZARD_ORBIT_MAX);
        let speed = self.rng.random_range(HAZARD_SPEED_MIN..HAZARD_SPEED_MAX);
        self.hazards.push(Hazard {
            id,
            phase,
            orbit_radius,
            speed,
            pos: Vec3::ZERO,
            yaw: 0.0,
        });
    }

    /// Queue a replacement pickup `respawn_delay` seconds from now
    pub(crate) fn schedule_respawn(&mut self) {
        self.pending_respawns.push(PendingRespawn {
            due_at: self.elapsed + self.tuning.respawn_delay,
            generation: self.generation,
        });
    }

    /// Take this frame's events for the UI/audio collaborators
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
