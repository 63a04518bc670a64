//! Controller tunables.
//!
//! These are the only persisted knobs of the system. Hosts typically load
//! them from a RON file and hand them to `LocomotionController::new`, which
//! validates once up front so the per-tick path never has to.

use serde::{Deserialize, Serialize};

/// Tunables for a single character controller.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal movement speed (units per second).
    pub player_speed: f32,
    /// Apex height of a jump (units). The jump impulse is derived from this
    /// and `gravity` so the character actually reaches it.
    pub jump_height: f32,
    /// Gravitational acceleration (units per second squared, negative Y).
    pub gravity: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            player_speed: 2.0,
            jump_height: 1.0,
            gravity: -9.81,
        }
    }
}

impl LocomotionConfig {
    /// Check the tunables once, at setup time.
    ///
    /// The jump impulse is `sqrt(jump_height * -3.0 * gravity)`, so gravity
    /// must be strictly negative or the formula has no real solution.
    pub fn validate(&self) -> Result<(), String> {
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(format!(
                "player_speed must be finite and non-negative, got {}",
                self.player_speed
            ));
        }
        if !self.jump_height.is_finite() || self.jump_height < 0.0 {
            return Err(format!(
                "jump_height must be finite and non-negative, got {}",
                self.jump_height
            ));
        }
        if !self.gravity.is_finite() || self.gravity >= 0.0 {
            return Err(format!(
                "gravity must be finite and negative (downward), got {}",
                self.gravity
            ));
        }
        Ok(())
    }

    /// Instantaneous vertical velocity needed to reach `jump_height` under
    /// constant `gravity`.
    pub fn jump_impulse(&self) -> f32 {
        (self.jump_height * -3.0 * self.gravity).sqrt()
    }
}
