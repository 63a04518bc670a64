//! Third-person orbit viewpoint.
//!
//! Orbits behind the character at a fixed distance and pitch, supplying the
//! camera-relative movement basis and a pinhole ray for pointer look. No
//! window exists in the harness, so the "screen" is a virtual viewport with
//! pixel coordinates, origin top-left.

use bevy::prelude::*;
use locomotion::{PointerRay, ViewBasis, Viewpoint};

/// Orbit radius from the pivot (meters).
pub const ORBIT_DISTANCE: f32 = 5.5;
/// Default orbit angle above the horizon (radians).
pub const ORBIT_PITCH: f32 = 0.35;
/// Pivot height above the character position.
pub const PIVOT_HEIGHT: f32 = 1.0;

/// Vertical field of view of the virtual camera.
pub const FOV_Y: f32 = 70.0_f32.to_radians();
/// Virtual viewport size in pixels.
pub const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Orbiting viewpoint around a character.
#[derive(Resource, Clone, Copy, Debug)]
pub struct OrbitRig {
    pub pivot: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitRig {
    pub fn new(pivot: Vec3) -> Self {
        Self {
            pivot,
            yaw: 0.0,
            pitch: ORBIT_PITCH,
            distance: ORBIT_DISTANCE,
        }
    }

    fn pivot_point(&self) -> Vec3 {
        self.pivot + Vec3::new(0.0, PIVOT_HEIGHT, 0.0)
    }

    /// Camera position on the orbit sphere.
    pub fn eye(&self) -> Vec3 {
        let pivot = self.pivot_point();
        let horizontal = self.distance * self.pitch.cos();
        let vertical = self.distance * self.pitch.sin();
        let behind = Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos());
        pivot + behind * horizontal + Vec3::new(0.0, vertical, 0.0)
    }

    /// Camera rotation, level (no roll), looking at the pivot.
    fn rotation(&self) -> Quat {
        Transform::from_translation(self.eye())
            .looking_at(self.pivot_point(), Vec3::Y)
            .rotation
    }
}

impl Viewpoint for OrbitRig {
    fn basis(&self) -> ViewBasis {
        let toward = self.pivot_point() - self.eye();
        let forward = Vec3::new(toward.x, 0.0, toward.z).normalize();
        ViewBasis {
            forward,
            right: forward.cross(Vec3::Y),
        }
    }

    fn screen_ray(&self, screen: Vec2) -> PointerRay {
        // Pixel -> normalized device coordinates (y up).
        let ndc = Vec2::new(
            2.0 * screen.x / VIEWPORT.x - 1.0,
            1.0 - 2.0 * screen.y / VIEWPORT.y,
        );
        let tan_half = (FOV_Y * 0.5).tan();
        let aspect = VIEWPORT.x / VIEWPORT.y;
        // Camera space: x right, y up, looking down -Z.
        let camera_dir = Vec3::new(ndc.x * tan_half * aspect, ndc.y * tan_half, -1.0);
        PointerRay {
            origin: self.eye(),
            dir: (self.rotation() * camera_dir).normalize(),
        }
    }
}
