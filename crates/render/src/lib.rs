//! Rendering Adapter: renderer-agnostic camera, controls and frame loop.
//!
//! # Invariants
//! - Renderers never mutate the scene.
//! - The camera is the only state that changes after startup, and only
//!   through `OrbitControls::update`.
//! - One loop iteration runs controls update then draw, exactly once each.

mod camera;
mod controls;
mod frame_loop;
mod renderer;

pub use camera::{FAR_PLANE, FOV_DEGREES, NEAR_PLANE, PerspectiveCamera, START_POSITION};
pub use controls::OrbitControls;
pub use frame_loop::{Frame, FrameScheduler, RenderLoop};
pub use renderer::{DebugTextRenderer, Renderer};
