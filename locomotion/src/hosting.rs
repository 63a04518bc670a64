//! Collaborator traits the host must provide.
//!
//! The controller never talks to an engine directly. Instead the host hands
//! three capabilities into every `update` call: a swept capsule mover, a
//! viewpoint (camera) for the movement basis and pointer rays, and a ground
//! raycast query. Passing them explicitly means a missing camera or terrain
//! is a compile error at the call site, not a runtime fault mid-frame.

use bevy::prelude::*;

/// Result of one swept capsule move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether the capsule rests on a surface after the move.
    pub grounded: bool,
}

/// Camera-relative movement basis.
///
/// Both vectors are expected to lie close to the ground plane; the motion
/// step flattens the combined direction anyway, so a pitched camera forward
/// only shortens the horizontal component it contributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

/// A world-space ray built from a screen-space pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRay {
    pub origin: Vec3,
    /// Direction, normalized by the producer.
    pub dir: Vec3,
}

/// Swept, collision-aware position update for a capsule-shaped character.
///
/// Implementations slide the capsule along the requested displacement,
/// stopping or redirecting at obstacles, and mutate the character's world
/// position as a side effect.
pub trait CapsuleMover {
    /// Move by `displacement` and report the resulting ground contact.
    fn slide(&mut self, displacement: Vec3) -> MoveOutcome;

    /// Current world position of the capsule center.
    fn position(&self) -> Vec3;
}

/// Active viewpoint: supplies the camera-relative basis and converts
/// screen-space pointer positions into world rays.
pub trait Viewpoint {
    fn basis(&self) -> ViewBasis;

    fn screen_ray(&self, screen: Vec2) -> PointerRay;
}

/// Ground/terrain raycast query.
pub trait GroundQuery {
    /// Intersect `ray` with the ground within `max_distance`.
    /// Returns the world-space hit point, or `None` on a miss.
    fn raycast(&self, ray: &PointerRay, max_distance: f32) -> Option<Vec3>;
}
