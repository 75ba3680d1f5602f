//! Camera rig: smooth follow, look-at targeting, and a timed shake overlay
//!
//! The follow blend is applied per call rather than scaled by delta-time, so
//! responsiveness is coupled to frame rate. Kept that way on purpose;
//! normalizing it would change how the camera lags at uncommon refresh rates.

use glam::Vec3;
use rand::Rng;

use crate::consts::{CAMERA_LERP, CAMERA_LOOK_HEIGHT, CAMERA_OFFSET};
use crate::ground_direction;

/// In-flight shake parameters
#[derive(Debug, Clone, Copy)]
struct Shake {
    amount: f32,
    duration: f32,
    elapsed: f32,
}

/// Third-person follow camera
#[derive(Debug, Clone)]
pub struct CameraRig {
    /// Follow base position; the shake overlay never touches this, which is
    /// what guarantees a clean restore when the shake ends
    pub pos: Vec3,
    /// Current look target
    pub look_at: Vec3,
    shake: Option<Shake>,
    jitter: Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            pos: CAMERA_OFFSET,
            look_at: Vec3::new(0.0, CAMERA_LOOK_HEIGHT, 0.0),
            shake: None,
            jitter: Vec3::ZERO,
        }
    }

    /// Advance the follow blend and the shake overlay for one frame
    pub fn update<R: Rng>(&mut self, player_pos: Vec3, dt: f32, rng: &mut R) {
        let desired = player_pos + CAMERA_OFFSET;
        self.pos = self.pos.lerp(desired, CAMERA_LERP);
        self.look_at = player_pos + Vec3::Y * CAMERA_LOOK_HEIGHT;

        match &mut self.shake {
            Some(shake) => {
                shake.elapsed += dt;
                if shake.elapsed >= shake.duration {
                    self.shake = None;
                    self.jitter = Vec3::ZERO;
                } else {
                    // Linear decay to zero over the shake duration
                    let strength = shake.amount * (1.0 - shake.elapsed / shake.duration);
                    self.jitter = Vec3::new(
                        rng.random_range(-strength..=strength),
                        rng.random_range(-strength..=strength),
                        rng.random_range(-strength..=strength),
                    );
                }
            }
            None => self.jitter = Vec3::ZERO,
        }
    }

    /// Begin a shake, replacing any in-flight one. The old shake's offset is
    /// discarded immediately, so no residual displacement can survive it.
    pub fn start_shake(&mut self, amount: f32, duration: f32) {
        self.jitter = Vec3::ZERO;
        self.shake = Some(Shake {
            amount,
            duration,
            elapsed: 0.0,
        });
    }

    /// True while a shake overlay is in flight
    pub fn shake_active(&self) -> bool {
        self.shake.is_some()
    }

    /// Drop any in-flight shake (session restart)
    pub fn cancel_shake(&mut self) {
        self.shake = None;
        self.jitter = Vec3::ZERO;
    }

    /// Render-facing camera position: follow base plus shake offset
    pub fn eye(&self) -> Vec3 {
        self.pos + self.jitter
    }

    /// Ground-plane heading toward the look target, for camera-relative
    /// steering. Zero only in the degenerate straight-down case.
    pub fn forward(&self) -> Vec3 {
        ground_direction(self.look_at - self.pos)
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
