//! Host-agnostic third-person character locomotion.
//!
//! One `LocomotionController` per character, stepped once per tick by the
//! host. The engine-facing seams (capsule collision, camera, ground raycast)
//! are injected as traits (see `hosting`) so the same logic runs under a
//! game engine, a headless simulation, or a unit test.

pub mod config;
pub mod controller;
pub mod facing;
pub mod hosting;
pub mod input;
pub mod motion;

pub use config::LocomotionConfig;
pub use controller::LocomotionController;
pub use facing::{FacingResolver, POINTER_RAY_MAX_DISTANCE};
pub use hosting::{CapsuleMover, GroundQuery, MoveOutcome, PointerRay, ViewBasis, Viewpoint};
pub use input::{LocomotionInput, MIN_INPUT_SQ};
pub use motion::MotionState;
