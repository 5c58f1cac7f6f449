use std::fmt::Write;

use houseview_scene::{Light, Node, Scene, Shape, Side};

use crate::camera::PerspectiveCamera;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and a camera, then produces output. It never
/// mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene from the camera's viewpoint.
    fn render(&self, scene: &Scene, camera: &PerspectiveCamera) -> Self::Output;
}

/// Human-readable dump of a scene and camera.
///
/// Used for startup logging and for exercising the render interface without
/// a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, camera: &PerspectiveCamera) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "=== Scene (nodes={}, background=#{:06x}) ===",
            scene.len(),
            scene.background().to_hex()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.target.x,
            camera.target.y,
            camera.target.z,
            camera.fov_degrees
        );

        for (id, node) in scene.nodes() {
            let id = id.0.to_string();
            let short_id = &id[..8];
            match node {
                Node::Mesh(mesh) => {
                    let p = mesh.transform.position;
                    let shape = match mesh.shape {
                        Shape::Box {
                            width,
                            height,
                            depth,
                        } => format!("box {width}x{height}x{depth}"),
                        Shape::Plane { width, height } => format!("plane {width}x{height}"),
                    };
                    let sides = match mesh.material.side {
                        Side::Front => "front",
                        Side::Double => "double",
                    };
                    let _ = writeln!(
                        out,
                        "  [{short_id}] mesh {} {shape} #{:06x} {sides} pos=({:.2}, {:.2}, {:.2}) rot_x={:.4}",
                        mesh.name,
                        mesh.material.color.to_hex(),
                        p.x,
                        p.y,
                        p.z,
                        mesh.transform.rotation_x(),
                    );
                }
                Node::Light(Light::Ambient { intensity, .. }) => {
                    let _ = writeln!(out, "  [{short_id}] ambient light intensity={intensity}");
                }
                Node::Light(Light::Directional {
                    intensity,
                    position,
                    ..
                }) => {
                    let _ = writeln!(
                        out,
                        "  [{short_id}] directional light intensity={intensity} pos=({:.1}, {:.1}, {:.1})",
                        position.x, position.y, position.z
                    );
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use houseview_common::{Color, Viewport};
    use houseview_scene::{HouseConfig, build_scene};

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Viewport::new(800, 600))
    }

    #[test]
    fn debug_renderer_empty_scene() {
        let scene = Scene::new(Color::from_hex(0x87CEEB));
        let output = DebugTextRenderer::new().render(&scene, &camera());
        assert!(output.contains("nodes=0"));
        assert!(output.contains("background=#87ceeb"));
        assert!(output.contains("eye=(15.0, 10.0, 15.0)"));
        assert!(output.contains("fov=75"));
    }

    #[test]
    fn debug_renderer_lists_every_node() {
        let scene = build_scene(&HouseConfig::default());
        let output = DebugTextRenderer::new().render(&scene, &camera());
        assert!(output.contains("nodes=9"));
        assert_eq!(output.lines().count(), 2 + 9);
        assert!(output.contains("ambient light intensity=0.7"));
        assert!(output.contains("directional light intensity=0.5 pos=(10.0, 10.0, 10.0)"));
        assert!(output.contains("mesh ground plane 40x15 #a0a0a0 double pos=(0.00, 0.00, 0.00)"));
        assert!(output.contains("mesh wall_right box 0.1x10x15 #7c4f30 front pos=(20.00, 5.00, 0.00)"));
        assert!(output.contains("mesh roof_back plane 40x"));
    }

    #[test]
    fn rendering_does_not_change_the_scene() {
        let scene = build_scene(&HouseConfig::default());
        let renderer = DebugTextRenderer::new();
        let first = renderer.render(&scene, &camera());
        let second = renderer.render(&scene, &camera());
        assert_eq!(first, second);
        assert_eq!(scene.len(), 9);
    }
}
