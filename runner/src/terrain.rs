//! Deterministic rolling heightfield used as the harness ground.
//!
//! Same seed produces the same terrain, so runs are reproducible. The
//! heightfield doubles as the locomotion crate's `GroundQuery`: pointer rays
//! are marched against the surface and the first crossing is refined by
//! bisection.

use bevy::prelude::*;
use locomotion::{GroundQuery, PointerRay};
use noise::{NoiseFn, Perlin};

/// World generation seed - same seed = same world.
pub const WORLD_SEED: u32 = 42;

/// Maximum terrain height variation (meters).
pub const MAX_HEIGHT: f32 = 6.0;

/// Broad hill frequency (world units per noise unit).
const HILL_SCALE: f64 = 0.015;
/// Fine surface detail frequency.
const DETAIL_SCALE: f64 = 0.11;

/// Ray-march step when scanning for a surface crossing (meters).
const RAY_STEP: f32 = 0.5;
/// Bisection iterations once a crossing interval is found.
const RAY_REFINE_STEPS: u32 = 16;

/// Perlin-based heightfield.
#[derive(Resource)]
pub struct Heightfield {
    hill_noise: Perlin,
    detail_noise: Perlin,
}

impl Default for Heightfield {
    fn default() -> Self {
        Self::new(WORLD_SEED)
    }
}

impl Heightfield {
    pub fn new(seed: u32) -> Self {
        Self {
            hill_noise: Perlin::new(seed),
            detail_noise: Perlin::new(seed.wrapping_add(1000)),
        }
    }

    /// Terrain surface height at a world XZ position.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let hills = self.hill_noise.get([x as f64 * HILL_SCALE, z as f64 * HILL_SCALE]) as f32;
        let detail = self
            .detail_noise
            .get([x as f64 * DETAIL_SCALE, z as f64 * DETAIL_SCALE]) as f32;
        (hills * 0.85 + detail * 0.15) * MAX_HEIGHT
    }

    fn above_surface(&self, point: Vec3) -> bool {
        point.y > self.height_at(point.x, point.z)
    }
}

impl GroundQuery for Heightfield {
    fn raycast(&self, ray: &PointerRay, max_distance: f32) -> Option<Vec3> {
        // Rays that start underground have no well-defined entry point.
        if !self.above_surface(ray.origin) {
            return None;
        }

        let mut prev_t = 0.0_f32;
        let mut t = RAY_STEP;
        while t <= max_distance {
            if !self.above_surface(ray.origin + ray.dir * t) {
                // Crossing between prev_t and t: bisect down to the surface.
                let (mut lo, mut hi) = (prev_t, t);
                for _ in 0..RAY_REFINE_STEPS {
                    let mid = 0.5 * (lo + hi);
                    if self.above_surface(ray.origin + ray.dir * mid) {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                return Some(ray.origin + ray.dir * (0.5 * (lo + hi)));
            }
            prev_t = t;
            t += RAY_STEP;
        }
        None
    }
}
