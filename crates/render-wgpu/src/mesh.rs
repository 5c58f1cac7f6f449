//! Triangle meshes for scene shapes.
//!
//! Shapes are tessellated around their local origin. Boxes get one quad per
//! face with flat normals; planes lie in local XY facing +Z. Triangles wind
//! counter-clockwise seen from the side the normal points to.

use bytemuck::{Pod, Zeroable};
use houseview_scene::Shape;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// CPU-side geometry ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

pub fn tessellate(shape: &Shape) -> MeshData {
    match *shape {
        Shape::Box {
            width,
            height,
            depth,
        } => box_mesh(width / 2.0, height / 2.0, depth / 2.0),
        Shape::Plane { width, height } => plane_mesh(width / 2.0, height / 2.0),
    }
}

fn box_mesh(x: f32, y: f32, z: f32) -> MeshData {
    let v = |position: [f32; 3], normal: [f32; 3]| Vertex { position, normal };
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        v([-x, -y,  z], [0.0, 0.0, 1.0]),
        v([ x, -y,  z], [0.0, 0.0, 1.0]),
        v([ x,  y,  z], [0.0, 0.0, 1.0]),
        v([-x,  y,  z], [0.0, 0.0, 1.0]),
        // -Z face
        v([ x, -y, -z], [0.0, 0.0, -1.0]),
        v([-x, -y, -z], [0.0, 0.0, -1.0]),
        v([-x,  y, -z], [0.0, 0.0, -1.0]),
        v([ x,  y, -z], [0.0, 0.0, -1.0]),
        // +X face
        v([ x, -y,  z], [1.0, 0.0, 0.0]),
        v([ x, -y, -z], [1.0, 0.0, 0.0]),
        v([ x,  y, -z], [1.0, 0.0, 0.0]),
        v([ x,  y,  z], [1.0, 0.0, 0.0]),
        // -X face
        v([-x, -y, -z], [-1.0, 0.0, 0.0]),
        v([-x, -y,  z], [-1.0, 0.0, 0.0]),
        v([-x,  y,  z], [-1.0, 0.0, 0.0]),
        v([-x,  y, -z], [-1.0, 0.0, 0.0]),
        // +Y face
        v([-x,  y,  z], [0.0, 1.0, 0.0]),
        v([ x,  y,  z], [0.0, 1.0, 0.0]),
        v([ x,  y, -z], [0.0, 1.0, 0.0]),
        v([-x,  y, -z], [0.0, 1.0, 0.0]),
        // -Y face
        v([-x, -y, -z], [0.0, -1.0, 0.0]),
        v([ x, -y, -z], [0.0, -1.0, 0.0]),
        v([ x, -y,  z], [0.0, -1.0, 0.0]),
        v([-x, -y,  z], [0.0, -1.0, 0.0]),
    ];
    let indices = (0..6u16)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base + 2, base + 3, base]
        })
        .collect();
    MeshData { vertices, indices }
}

fn plane_mesh(x: f32, y: f32) -> MeshData {
    let normal = [0.0, 0.0, 1.0];
    let vertices = vec![
        Vertex { position: [-x, -y, 0.0], normal },
        Vertex { position: [x, -y, 0.0], normal },
        Vertex { position: [x, y, 0.0], normal },
        Vertex { position: [-x, y, 0.0], normal },
    ];
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn bounds(mesh: &MeshData) -> (Vec3, Vec3) {
        mesh.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    /// Every triangle's winding agrees with its vertices' normal.
    fn assert_outward_winding(mesh: &MeshData) {
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let face = (Vec3::from(b.position) - Vec3::from(a.position))
                .cross(Vec3::from(c.position) - Vec3::from(a.position));
            assert!(face.dot(Vec3::from(a.normal)) > 0.0);
        }
    }

    #[test]
    fn box_counts_and_extents() {
        let mesh = tessellate(&Shape::Box {
            width: 40.0,
            height: 10.0,
            depth: 0.1,
        });
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.index_count(), 36);
        let (lo, hi) = bounds(&mesh);
        assert_eq!(lo, Vec3::new(-20.0, -5.0, -0.05));
        assert_eq!(hi, Vec3::new(20.0, 5.0, 0.05));
        assert_outward_winding(&mesh);
    }

    #[test]
    fn plane_counts_and_extents() {
        let mesh = tessellate(&Shape::Plane {
            width: 40.0,
            height: 15.0,
        });
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.index_count(), 6);
        let (lo, hi) = bounds(&mesh);
        assert_eq!(lo, Vec3::new(-20.0, -7.5, 0.0));
        assert_eq!(hi, Vec3::new(20.0, 7.5, 0.0));
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
        assert_outward_winding(&mesh);
    }

    #[test]
    fn indices_stay_in_range() {
        for shape in [
            Shape::Box {
                width: 1.0,
                height: 2.0,
                depth: 3.0,
            },
            Shape::Plane {
                width: 1.0,
                height: 1.0,
            },
        ] {
            let mesh = tessellate(&shape);
            assert!(
                mesh.indices
                    .iter()
                    .all(|&i| (i as usize) < mesh.vertices.len())
            );
        }
    }
}
