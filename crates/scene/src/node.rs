use glam::Vec3;
use houseview_common::{Color, Transform};
use serde::{Deserialize, Serialize};

/// Immutable shape description. Dimensions are in local space before the
/// mesh transform is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box centered on the local origin.
    Box { width: f32, height: f32, depth: f32 },
    /// Rectangle in the local XY plane, facing +Z.
    Plane { width: f32, height: f32 },
}

impl Shape {
    /// Local-space size along X, Y and Z. Planes have zero Z extent.
    pub fn extents(&self) -> Vec3 {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => Vec3::new(width, height, depth),
            Shape::Plane { width, height } => Vec3::new(width, height, 0.0),
        }
    }
}

/// Which faces of a mesh are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Back faces are culled.
    Front,
    /// Both faces are drawn.
    Double,
}

/// Surface material: a flat lit color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    pub side: Side,
}

impl Material {
    pub fn new(color: Color, side: Side) -> Self {
        Self { color, side }
    }
}

/// A renderable object: shape + material placed by a fixed transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub shape: Shape,
    pub material: Material,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(
        name: impl Into<String>,
        shape: Shape,
        material: Material,
        transform: Transform,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            material,
            transform,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

/// Light sources supported by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Light {
    /// Uniform fill with no direction or falloff.
    Ambient { color: Color, intensity: f32 },
    /// Distant source shining from `position` toward the origin.
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity, .. } | Light::Directional { intensity, .. } => intensity,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Light::Ambient { color, .. } | Light::Directional { color, .. } => color,
        }
    }
}

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Mesh(Mesh),
    Light(Light),
}

impl Node {
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Node::Mesh(mesh) => Some(mesh),
            Node::Light(_) => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Node::Light(light) => Some(light),
            Node::Mesh(_) => None,
        }
    }
}

impl From<Mesh> for Node {
    fn from(mesh: Mesh) -> Self {
        Node::Mesh(mesh)
    }
}

impl From<Light> for Node {
    fn from(light: Light) -> Self {
        Node::Light(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_has_no_depth() {
        let plane = Shape::Plane {
            width: 2.0,
            height: 3.0,
        };
        assert_eq!(plane.extents(), Vec3::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn node_accessors() {
        let light: Node = Light::Ambient {
            color: Color::WHITE,
            intensity: 0.7,
        }
        .into();
        assert!(light.as_mesh().is_none());
        assert_eq!(light.as_light().map(Light::intensity), Some(0.7));

        let mesh: Node = Mesh::new(
            "cube",
            Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Material::new(Color::WHITE, Side::Front),
            Transform::default(),
        )
        .into();
        assert_eq!(mesh.as_mesh().map(|m| m.name.as_str()), Some("cube"));
        assert!(mesh.as_light().is_none());
    }
}
