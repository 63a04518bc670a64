//! The per-tick orchestration layer.
//!
//! `LocomotionController` ties the pieces together in a fixed order each
//! tick: direct look, then pointer look, then the motion step (which ends
//! with the ground-state refresh). The host calls `update` once per tick and
//! `jump` whenever its input layer reports the jump press as performed.

use bevy::prelude::*;

use crate::config::LocomotionConfig;
use crate::facing::FacingResolver;
use crate::hosting::{CapsuleMover, GroundQuery, Viewpoint};
use crate::input::LocomotionInput;
use crate::motion::{step_motion, try_jump, MotionState};

/// Third-person character locomotion controller.
///
/// Owns the motion state, the facing state, and the character's rotation.
/// The character's *position* lives in the host's `CapsuleMover`: moving is
/// always a swept, collision-resolved operation, never a raw write.
#[derive(Component, Clone, Copy, Debug)]
pub struct LocomotionController {
    config: LocomotionConfig,
    state: MotionState,
    facing: FacingResolver,
    rotation: Quat,
}

impl LocomotionController {
    /// Build a controller, validating the tunables up front.
    ///
    /// Fails fast with a descriptive message on a bad config so the per-tick
    /// path never has to defend against one.
    pub fn new(config: LocomotionConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            state: MotionState::default(),
            facing: FacingResolver::default(),
            rotation: Quat::IDENTITY,
        })
    }

    /// Advance one tick.
    ///
    /// Order is fixed: direct look, then pointer look (last writer wins when
    /// both have non-trivial input), then movement and the grounded refresh.
    pub fn update(
        &mut self,
        input: &LocomotionInput,
        dt: f32,
        mover: &mut impl CapsuleMover,
        viewpoint: &impl Viewpoint,
        ground: &impl GroundQuery,
    ) {
        if let Some(rotation) = self.facing.direct_look(input.look) {
            self.rotation = rotation;
        }
        if let Some(rotation) =
            self.facing
                .pointer_look(input.pointer, viewpoint, ground, mover.position())
        {
            self.rotation = rotation;
        }

        step_motion(
            input.move_axis,
            &viewpoint.basis(),
            &self.config,
            &mut self.state,
            mover,
            dt,
        );
    }

    /// Edge-triggered jump event, gated on ground contact at this instant.
    /// Returns whether the impulse applied.
    pub fn jump(&mut self) -> bool {
        try_jump(&self.config, &mut self.state)
    }

    /// Current facing rotation (yaw-only, up = +Y).
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Ground contact as of the last tick's mover result.
    pub fn grounded(&self) -> bool {
        self.state.grounded
    }

    /// Accumulated vertical velocity.
    pub fn vertical_velocity(&self) -> f32 {
        self.state.vertical_velocity
    }

    /// Last resolved pointer facing target (stale on miss by design).
    pub fn facing_target(&self) -> Vec3 {
        self.facing.target()
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }
}
