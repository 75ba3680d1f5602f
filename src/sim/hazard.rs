//! Hazard kinematics
//!
//! Hazards carry no velocity or acceleration. Their trajectory is a pure
//! function of the session clock, which keeps them deterministic and
//! restartable: replaying the same elapsed time reproduces the same orbit
//! exactly.

use glam::Vec3;

use super::state::Hazard;
use crate::consts::{HAZARD_BASE_HEIGHT, HAZARD_BOB_AMPLITUDE};

/// Orbit position at `elapsed` seconds. The bob phase is detuned from the
/// orbit phase (x0.3) so hazards sharing a ring don't bounce in lockstep.
pub fn orbit_position(hazard: &Hazard, elapsed: f32) -> Vec3 {
    let angle = elapsed * hazard.speed + hazard.phase;
    Vec3::new(
        angle.cos() * hazard.orbit_radius,
        HAZARD_BASE_HEIGHT + (elapsed * hazard.speed + hazard.phase * 0.3).sin() * HAZARD_BOB_AMPLITUDE,
        angle.sin() * hazard.orbit_radius,
    )
}

/// Cosmetic spin, in radians
pub fn orbit_yaw(hazard: &Hazard, elapsed: f32) -> f32 {
    elapsed * hazard.speed
}

/// Refresh every hazard's cached pose from the session clock. The cache is
/// what collision tests and the render snapshot read.
pub fn advance_hazards(hazards: &mut [Hazard], elapsed: f32) {
    for hazard in hazards {
        hazard.pos = orbit_position(hazard, elapsed);
        hazard.yaw = orbit_yaw(hazard, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::horizontal_distance;
    use proptest::prelude::*;

    fn hazard(phase: f32, orbit_radius: f32, speed: f32) -> Hazard {
        Hazard {
            id: 1,
            phase,
            orbit_radius,
            speed,
            pos: Vec3::ZERO,
            yaw: 0.0,
        }
    }

    #[test]
    fn test_position_lies_on_orbit_circle() {
        let h = hazard(0.7, 10.0, 1.0);
        for i in 0..100 {
            let t = i as f32 * 0.13;
            let p = orbit_position(&h, t);
            assert!((horizontal_distance(p) - h.orbit_radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_bob_stays_in_band() {
        let h = hazard(2.1, 8.0, 1.3);
        for i in 0..1000 {
            let y = orbit_position(&h, i as f32 * 0.017).y;
            assert!(y >= HAZARD_BASE_HEIGHT - HAZARD_BOB_AMPLITUDE - 1e-5);
            assert!(y <= HAZARD_BASE_HEIGHT + HAZARD_BOB_AMPLITUDE + 1e-5);
        }
    }

    #[test]
    fn test_advance_writes_cache() {
        let mut hazards = vec![hazard(0.0, 12.0, 0.8)];
        advance_hazards(&mut hazards, 4.2);
        assert_eq!(hazards[0].pos, orbit_position(&hazards[0], 4.2));
        assert_eq!(hazards[0].yaw, 4.2 * 0.8);
    }

    proptest! {
        /// Same hazard, same time, same answer - no hidden state
        #[test]
        fn prop_deterministic(
            phase in 0.0f32..std::f32::consts::TAU,
            orbit_radius in HAZARD_ORBIT_MIN..HAZARD_ORBIT_MAX,
            speed in HAZARD_SPEED_MIN..HAZARD_SPEED_MAX,
            t in 0.0f32..10_000.0,
        ) {
            let h = hazard(phase, orbit_radius, speed);
            prop_assert_eq!(orbit_position(&h, t), orbit_position(&h, t));
            prop_assert_eq!(orbit_yaw(&h, t), orbit_yaw(&h, t));
        }
    }
}
