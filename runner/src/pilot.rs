//! Scripted input source for the headless harness.
//!
//! Stands in for a human: wanders the move axis around, occasionally idles,
//! sweeps the pointer across the virtual screen, and hops now and then.
//! Deterministic per seed so harness runs are reproducible.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rig::VIEWPORT;

/// Seconds between decisions, lower bound.
const DECISION_TIME_MIN: f32 = 1.5;
/// Seconds between decisions, upper bound.
const DECISION_TIME_MAX: f32 = 4.0;
/// Chance a decision is "stand still".
const IDLE_CHANCE: f64 = 0.2;
/// Chance a decision includes a jump press.
const JUMP_CHANCE: f64 = 0.25;
/// Chance a decision starts a pointer sweep instead of direct look.
const POINTER_CHANCE: f64 = 0.35;
/// How long a pointer sweep lasts.
const POINTER_SWEEP_TIME: f32 = 1.2;

/// What the pilot wants this tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct PilotCommand {
    pub move_axis: Vec2,
    pub look: Vec2,
    pub pointer: Vec2,
    /// One-shot jump press (edge event, not held).
    pub jump: bool,
}

/// Wandering input generator.
#[derive(Resource)]
pub struct Pilot {
    rng: StdRng,
    move_axis: Vec2,
    time_left: f32,
    pointer_left: f32,
    pointer_from: Vec2,
    pointer_to: Vec2,
}

impl Pilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            move_axis: Vec2::ZERO,
            time_left: 0.0,
            pointer_left: 0.0,
            pointer_from: Vec2::ZERO,
            pointer_to: Vec2::ZERO,
        }
    }

    pub fn tick(&mut self, dt: f32) -> PilotCommand {
        self.time_left -= dt;
        let mut jump = false;

        if self.time_left <= 0.0 {
            self.time_left = self.rng.gen_range(DECISION_TIME_MIN..DECISION_TIME_MAX);

            self.move_axis = if self.rng.gen_bool(IDLE_CHANCE) {
                Vec2::ZERO
            } else {
                let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
                Vec2::new(angle.cos(), angle.sin())
            };

            jump = self.rng.gen_bool(JUMP_CHANCE);

            if self.rng.gen_bool(POINTER_CHANCE) {
                self.pointer_left = POINTER_SWEEP_TIME;
                self.pointer_from = self.random_screen_point();
                self.pointer_to = self.random_screen_point();
            }
        }

        let pointer = if self.pointer_left > 0.0 {
            let t = 1.0 - self.pointer_left / POINTER_SWEEP_TIME;
            self.pointer_left -= dt;
            self.pointer_from.lerp(self.pointer_to, t)
        } else {
            Vec2::ZERO
        };

        PilotCommand {
            move_axis: self.move_axis,
            // While not sweeping the pointer, face where we walk.
            look: if pointer == Vec2::ZERO { self.move_axis } else { Vec2::ZERO },
            pointer,
            jump,
        }
    }

    fn random_screen_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..VIEWPORT.x),
            self.rng.gen_range(0.0..VIEWPORT.y),
        )
    }
}
