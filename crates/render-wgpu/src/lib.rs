//! wgpu render backend for houseview.
//!
//! Tessellates scene shapes, uploads them once, and draws them lit by the
//! scene's ambient and directional lights. Front-sided meshes are drawn with
//! back-face culling, double-sided meshes without.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Only the camera uniform changes between frames.

mod error;
mod gpu;
mod mesh;
mod shaders;
mod uniforms;

pub use error::GpuInitError;
pub use gpu::{GpuContext, WgpuRenderer};
pub use mesh::{MeshData, Vertex, tessellate};
pub use uniforms::{InstanceData, MAX_DIRECTIONAL_LIGHTS, SceneUniforms};
