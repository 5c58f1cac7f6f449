//! GPU-facing uniform and instance layouts.
//!
//! Layouts must match the WGSL structs in `shaders.rs`. Every field is a
//! 16-byte vector or array of them, so no manual padding is needed.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use houseview_scene::{Light, Mesh, Scene};

/// Directional lights beyond this count are ignored by the shader.
pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Summed ambient radiance in linear RGB; `w` unused.
    pub ambient: [f32; 4],
    /// Unit vectors pointing from the surface toward each light.
    pub light_dirs: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    /// Linear color times intensity.
    pub light_colors: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    /// `x` holds the number of active directional lights.
    pub light_count: [u32; 4],
}

impl SceneUniforms {
    /// Pack the scene's lights. Directional lights shine from their position
    /// toward the origin.
    pub fn from_lights<'a>(lights: impl IntoIterator<Item = &'a Light>) -> Self {
        let mut uniforms = Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            ambient: [0.0; 4],
            light_dirs: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            light_colors: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            light_count: [0; 4],
        };

        let mut count = 0;
        for light in lights {
            let [r, g, b] = light.color().to_linear();
            let k = light.intensity();
            match light {
                Light::Ambient { .. } => {
                    uniforms.ambient[0] += r * k;
                    uniforms.ambient[1] += g * k;
                    uniforms.ambient[2] += b * k;
                }
                Light::Directional { position, .. } => {
                    if count == MAX_DIRECTIONAL_LIGHTS {
                        tracing::warn!("too many directional lights, ignoring extra");
                        continue;
                    }
                    let Some(dir) = position.try_normalize() else {
                        tracing::warn!("directional light at the origin has no direction");
                        continue;
                    };
                    uniforms.light_dirs[count] = dir.extend(0.0).to_array();
                    uniforms.light_colors[count] = [r * k, g * k, b * k, 1.0];
                    count += 1;
                }
            }
        }
        uniforms.light_count[0] = count as u32;
        uniforms
    }

    pub fn from_scene(scene: &Scene) -> Self {
        Self::from_lights(scene.lights())
    }

    pub fn with_view_proj(mut self, view_proj: Mat4) -> Self {
        self.view_proj = view_proj.to_cols_array_2d();
        self
    }
}

/// Per-mesh model matrix and base color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub model_0: [f32; 4],
    pub model_1: [f32; 4],
    pub model_2: [f32; 4],
    pub model_3: [f32; 4],
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let cols = mesh.transform.to_matrix().to_cols_array_2d();
        let [r, g, b] = mesh.material.color.to_linear();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: [r, g, b, 1.0],
        }
    }
}
