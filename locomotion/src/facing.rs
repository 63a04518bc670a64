//! Facing resolution: look input and pointer raycast to world orientation.
//!
//! Two independent behaviors run each tick, direct look first, pointer look
//! second; if both have non-trivial input the pointer result wins for the
//! tick. Both keep the character level (yaw only, no pitch or roll).

use bevy::prelude::*;

use crate::hosting::{GroundQuery, Viewpoint};
use crate::input::MIN_INPUT_SQ;

/// Maximum pointer raycast distance against the ground (world units).
pub const POINTER_RAY_MAX_DISTANCE: f32 = 1000.0;

/// Resolves look/pointer input into a facing rotation.
///
/// Holds the last successfully resolved pointer hit. A miss does NOT clear
/// it: the character keeps facing the stale point, and before the first hit
/// the point is the world origin. Inherited behavior, kept as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct FacingResolver {
    world_point: Vec3,
}

impl FacingResolver {
    /// Last resolved pointer hit (world space). Stale on miss by design.
    pub fn target(&self) -> Vec3 {
        self.world_point
    }

    /// Resolve direct look input into a rotation.
    ///
    /// The 2D axes map onto the ground plane as (x, 0, y). Below the input
    /// deadzone this is a no-op and the prior orientation stands.
    pub fn direct_look(&self, look: Vec2) -> Option<Quat> {
        let dir = Vec3::new(look.x, 0.0, look.y);
        if dir.length_squared() < MIN_INPUT_SQ {
            return None;
        }
        Some(face_toward(dir))
    }

    /// Resolve pointer look: cast the pointer ray against the ground and
    /// face the hit point.
    ///
    /// On a hit, the stored world point updates. Hit or miss, the character
    /// faces `(point.x, own_height, point.z)`: the target's vertical
    /// component is clamped to the character's own elevation so terrain
    /// height never pitches the character up or down.
    pub fn pointer_look(
        &mut self,
        pointer: Vec2,
        viewpoint: &impl Viewpoint,
        ground: &impl GroundQuery,
        position: Vec3,
    ) -> Option<Quat> {
        if pointer.length_squared() < MIN_INPUT_SQ {
            return None;
        }

        let ray = viewpoint.screen_ray(pointer);
        if let Some(hit) = ground.raycast(&ray, POINTER_RAY_MAX_DISTANCE) {
            self.world_point = hit;
        }

        let look_at = Vec3::new(self.world_point.x, position.y, self.world_point.z);
        let dir = look_at - position;
        if dir.length_squared() <= f32::EPSILON {
            // Pointer resolved to our own column; nothing to face.
            return None;
        }
        Some(face_toward(dir))
    }
}

/// Level "face this direction" rotation (up = +Y, no roll).
fn face_toward(dir: Vec3) -> Quat {
    Transform::default().looking_to(dir, Vec3::Y).rotation
}
