//! Per-tick input snapshot for the controller.
//!
//! The host owns one of these and overwrites its fields whenever its input
//! layer delivers an event (possibly several times between ticks, possibly
//! not at all). The controller reads it exactly once per tick, so the value
//! consumed is always the most recent write (last-write-wins, no queueing).
//!
//! Jump is deliberately absent: it is an edge-triggered event, delivered by
//! calling `LocomotionController::jump()` at the moment the press fires.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Squared-magnitude deadzone below which an axis counts as no input.
/// Shared by the facing and motion paths.
pub const MIN_INPUT_SQ: f32 = 0.01;

/// Latched movement/look/pointer axes.
///
/// No validation happens here: out-of-range or malformed values pass through
/// unchanged and are filtered by the controller's input thresholds.
#[derive(Component, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct LocomotionInput {
    /// Horizontal movement axes, camera-relative (x = right, y = forward).
    pub move_axis: Vec2,
    /// Direct facing axes (x, y) mapped onto the ground plane as (x, 0, y).
    pub look: Vec2,
    /// Pointer position in screen space, resolved to a world facing target
    /// via a ground raycast.
    pub pointer: Vec2,
}

impl LocomotionInput {
    pub fn set_move(&mut self, value: Vec2) {
        self.move_axis = value;
    }

    pub fn set_look(&mut self, value: Vec2) {
        self.look = value;
    }

    pub fn set_pointer(&mut self, value: Vec2) {
        self.pointer = value;
    }
}
