//! Motion integration: camera-relative movement, gravity, jump, grounded.
//!
//! One call per tick builds a single combined displacement (horizontal
//! intent plus vertical velocity) and hands it to the host's swept capsule
//! mover, which owns collision resolution and the resulting ground contact.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::LocomotionConfig;
use crate::hosting::{CapsuleMover, ViewBasis};
use crate::input::MIN_INPUT_SQ;

/// Vertical velocity and ground contact, persisted across ticks.
///
/// `grounded` is only ever derived from the current tick's mover contact
/// result (never tracked independently).
#[derive(Component, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct MotionState {
    /// Accumulated vertical velocity (units per second, negative = falling).
    pub vertical_velocity: f32,
    /// Whether the capsule rested on a surface after the last move.
    pub grounded: bool,
}

/// Step the character's motion one tick.
///
/// - Horizontal: `basis.forward * move.y + basis.right * move.x`, flattened,
///   scaled by speed and dt. Below the input deadzone the horizontal term is
///   skipped entirely (exact zero, not zero-scaled).
/// - Gravity accrues every tick unconditionally.
/// - The combined displacement goes through the mover in one swept move.
/// - Grounded is refreshed from the mover's contact result; a negative
///   vertical velocity clears to exactly zero on contact. An upward velocity
///   while grounded (a jump impulse applied since the last move) survives.
pub fn step_motion(
    move_axis: Vec2,
    basis: &ViewBasis,
    config: &LocomotionConfig,
    state: &mut MotionState,
    mover: &mut impl CapsuleMover,
    dt: f32,
) {
    // --- Horizontal movement ---
    let mut horizontal = Vec3::ZERO;
    if move_axis.length_squared() >= MIN_INPUT_SQ {
        let mut dir = basis.forward * move_axis.y + basis.right * move_axis.x;
        dir.y = 0.0;
        horizontal = dir * config.player_speed * dt;
    }

    // --- Gravity ---
    state.vertical_velocity += config.gravity * dt;

    // --- Swept move ---
    let outcome = mover.slide(horizontal + Vec3::Y * (state.vertical_velocity * dt));

    // --- Ground state refresh ---
    state.grounded = outcome.grounded;
    if state.grounded && state.vertical_velocity < 0.0 {
        state.vertical_velocity = 0.0;
    }
}

/// Apply a jump impulse, gated on being grounded at this instant.
///
/// Returns whether the impulse applied. Airborne calls are no-ops.
pub fn try_jump(config: &LocomotionConfig, state: &mut MotionState) -> bool {
    if !state.grounded {
        return false;
    }
    state.vertical_velocity += config.jump_impulse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosting::MoveOutcome;

    /// Mover over an infinite flat floor at y = 0 for a capsule center that
    /// rests at y = 0. Records the displacements it was asked to make.
    struct FloorMover {
        position: Vec3,
        moves: Vec<Vec3>,
    }

    impl FloorMover {
        fn new(position: Vec3) -> Self {
            Self {
                position,
                moves: Vec::new(),
            }
        }
    }

    impl CapsuleMover for FloorMover {
        fn slide(&mut self, displacement: Vec3) -> MoveOutcome {
            self.moves.push(displacement);
            self.position += displacement;
            let grounded = self.position.y <= 0.0;
            if grounded {
                self.position.y = 0.0;
            }
            MoveOutcome { grounded }
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    /// Mover that reports contact no matter the displacement (a platform
    /// the capsule cannot leave within one move).
    struct PlatformMover {
        position: Vec3,
    }

    impl CapsuleMover for PlatformMover {
        fn slide(&mut self, displacement: Vec3) -> MoveOutcome {
            self.position += displacement;
            MoveOutcome { grounded: true }
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    /// Mover that never touches ground (free fall).
    struct AirMover {
        position: Vec3,
    }

    impl CapsuleMover for AirMover {
        fn slide(&mut self, displacement: Vec3) -> MoveOutcome {
            self.position += displacement;
            MoveOutcome { grounded: false }
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    fn world_basis() -> ViewBasis {
        ViewBasis {
            forward: Vec3::Z,
            right: Vec3::X,
        }
    }

    #[test]
    fn test_deadzone_skips_horizontal_entirely() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: 0.0,
            grounded: true,
        };
        let mut mover = FloorMover::new(Vec3::ZERO);

        // sqrt(0.01) edge: (0.05, 0.05) has squared magnitude 0.005 < 0.01.
        step_motion(
            Vec2::new(0.05, 0.05),
            &world_basis(),
            &config,
            &mut state,
            &mut mover,
            1.0 / 60.0,
        );

        let displacement = mover.moves[0];
        assert_eq!(displacement.x, 0.0);
        assert_eq!(displacement.z, 0.0);
        assert_eq!(mover.position().x, 0.0);
        assert_eq!(mover.position().z, 0.0);
    }

    #[test]
    fn test_forward_move_matches_speed_and_dt() {
        // move = (0, 1), forward = +Z, speed = 2.0, dt = 1/60
        // expected horizontal displacement ≈ (0, 0, 0.0333)
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: 0.0,
            grounded: true,
        };
        let mut mover = FloorMover::new(Vec3::ZERO);

        step_motion(
            Vec2::new(0.0, 1.0),
            &world_basis(),
            &config,
            &mut state,
            &mut mover,
            1.0 / 60.0,
        );

        let displacement = mover.moves[0];
        assert!((displacement.z - 2.0 / 60.0).abs() < 1e-6);
        assert_eq!(displacement.x, 0.0);
    }

    #[test]
    fn test_displacement_is_linear_in_speed() {
        let mut fast = LocomotionConfig::default();
        fast.player_speed = 4.0;
        let slow = LocomotionConfig::default();
        let basis = world_basis();
        let dt = 1.0 / 60.0;

        let mut state = MotionState::default();
        let mut mover = FloorMover::new(Vec3::ZERO);
        step_motion(Vec2::new(1.0, 0.0), &basis, &slow, &mut state, &mut mover, dt);
        let slow_x = mover.moves[0].x;

        let mut state = MotionState::default();
        let mut mover = FloorMover::new(Vec3::ZERO);
        step_motion(Vec2::new(1.0, 0.0), &basis, &fast, &mut state, &mut mover, dt);
        let fast_x = mover.moves[0].x;

        assert!((fast_x - 2.0 * slow_x).abs() < 1e-6);
    }

    #[test]
    fn test_pitched_camera_forward_is_flattened() {
        let config = LocomotionConfig::default();
        let basis = ViewBasis {
            forward: Vec3::new(0.0, -0.5, 0.8),
            right: Vec3::X,
        };
        let mut state = MotionState::default();
        let mut mover = AirMover {
            position: Vec3::new(0.0, 10.0, 0.0),
        };

        step_motion(Vec2::new(0.0, 1.0), &basis, &config, &mut state, &mut mover, 0.1);

        // The camera pitch contributes nothing vertically; only gravity does.
        let expected_y = config.gravity * 0.1 * 0.1;
        assert!((mover.position.y - 10.0 - expected_y).abs() < 1e-6);
        assert!(mover.position.z > 0.0);
    }

    #[test]
    fn test_gravity_accrues_over_ten_airborne_ticks() {
        // gravity = -9.81, dt = 1/60, 10 ticks from rest:
        // vertical_velocity = 10 * -9.81 / 60 ≈ -1.635
        let config = LocomotionConfig::default();
        let mut state = MotionState::default();
        let mut mover = AirMover {
            position: Vec3::new(0.0, 100.0, 0.0),
        };

        for _ in 0..10 {
            step_motion(Vec2::ZERO, &world_basis(), &config, &mut state, &mut mover, 1.0 / 60.0);
        }

        assert!((state.vertical_velocity - (-1.635)).abs() < 1e-3);
        assert!(!state.grounded);
    }

    #[test]
    fn test_landing_clears_negative_velocity_exactly() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: -3.0,
            grounded: false,
        };
        let mut mover = FloorMover::new(Vec3::new(0.0, 0.01, 0.0));

        step_motion(Vec2::ZERO, &world_basis(), &config, &mut state, &mut mover, 1.0 / 60.0);

        assert!(state.grounded);
        assert_eq!(state.vertical_velocity, 0.0);
    }

    #[test]
    fn test_upward_velocity_survives_grounded_tick() {
        // A jump impulse applied between moves must not be zeroed by the
        // ground clear, which only fires while still descending.
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: 0.0,
            grounded: true,
        };
        assert!(try_jump(&config, &mut state));
        let after_impulse = state.vertical_velocity;
        assert!(after_impulse > 0.0);

        // The mover still reports contact this tick (lift-off resolves on a
        // later move), so only gravity may touch the upward velocity.
        let dt = 1.0 / 60.0;
        let mut mover = PlatformMover {
            position: Vec3::ZERO,
        };
        step_motion(Vec2::ZERO, &world_basis(), &config, &mut state, &mut mover, dt);

        assert!(state.grounded);
        let expected = after_impulse + config.gravity * dt;
        assert!((state.vertical_velocity - expected).abs() < 1e-6);
        assert!(state.vertical_velocity > 0.0);
    }

    #[test]
    fn test_jump_requires_ground_contact() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: -1.0,
            grounded: false,
        };
        assert!(!try_jump(&config, &mut state));
        assert_eq!(state.vertical_velocity, -1.0);

        state.grounded = true;
        state.vertical_velocity = 0.0;
        assert!(try_jump(&config, &mut state));
        assert!((state.vertical_velocity - config.jump_impulse()).abs() < 1e-6);
    }
}
