//! Capsule mover backed by the heightfield.
//!
//! A real engine would sweep the capsule against arbitrary colliders; here
//! the only obstacle is the ground surface, so a move is translate-then-snap
//! against the sampled height under the capsule. Contact is reported the way
//! the locomotion crate expects: true only when the capsule actually rests
//! on the surface after the move.

use bevy::prelude::*;
use locomotion::{CapsuleMover, MoveOutcome};

use crate::terrain::Heightfield;

/// Character capsule height (meters); the capsule center sits half of this
/// above the ground when resting.
pub const CHARACTER_HEIGHT: f32 = 1.8;

/// How close above the surface still counts as resting contact while
/// descending (prevents tiny hover flicker on slopes).
pub const GROUND_SNAP_DISTANCE: f32 = 0.05;

/// Capsule center clearance above the surface.
#[inline]
pub fn ground_clearance() -> f32 {
    CHARACTER_HEIGHT * 0.5
}

/// Per-tick mover view: borrows the terrain, carries the capsule position.
/// The host reads `position` back after the tick and stores it.
pub struct TerrainMover<'a> {
    terrain: &'a Heightfield,
    pub position: Vec3,
}

impl<'a> TerrainMover<'a> {
    pub fn new(terrain: &'a Heightfield, position: Vec3) -> Self {
        Self { terrain, position }
    }
}

impl CapsuleMover for TerrainMover<'_> {
    fn slide(&mut self, displacement: Vec3) -> MoveOutcome {
        self.position += displacement;

        // Re-sample the floor where we ended up horizontally.
        let floor_y = self.terrain.height_at(self.position.x, self.position.z) + ground_clearance();

        let grounded = if self.position.y < floor_y {
            // Penetrated the surface: push the capsule back out.
            self.position.y = floor_y;
            true
        } else if displacement.y <= 0.0 && self.position.y - floor_y < GROUND_SNAP_DISTANCE {
            // Descending and close enough: snap to rest.
            self.position.y = floor_y;
            true
        } else {
            false
        };

        MoveOutcome { grounded }
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
