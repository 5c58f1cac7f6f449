use houseview_common::{Color, NodeId};

use crate::node::{Light, Mesh, Node};

/// The scene graph: an ordered collection of nodes plus a background color.
///
/// Nodes are kept in insertion order, which is also draw order. There is no
/// removal or mutable access; once added a node stays as built.
#[derive(Debug, Clone)]
pub struct Scene {
    background: Color,
    nodes: Vec<(NodeId, Node)>,
}

impl Scene {
    /// Create an empty scene with a solid background.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            nodes: Vec::new(),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Add a node. Returns its id.
    pub fn add(&mut self, node: impl Into<Node>) -> NodeId {
        let id = NodeId::new();
        self.nodes.push((id, node.into()));
        id
    }

    /// Add every node from a builder's output, preserving its order.
    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) -> Vec<NodeId> {
        nodes.into_iter().map(|node| self.add(node)).collect()
    }

    /// Number of nodes, lights included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, node)| node)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.nodes.iter().filter_map(|(_, node)| node.as_mesh())
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.nodes.iter().filter_map(|(_, node)| node.as_light())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Material, Shape, Side};
    use houseview_common::Transform;

    fn unit_box(name: &str) -> Mesh {
        Mesh::new(
            name,
            Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Material::new(Color::WHITE, Side::Front),
            Transform::default(),
        )
    }

    #[test]
    fn scene_starts_empty() {
        let scene = Scene::new(Color::from_hex(0x87CEEB));
        assert!(scene.is_empty());
        assert_eq!(scene.background().to_hex(), 0x87CEEB);
    }

    #[test]
    fn add_and_get() {
        let mut scene = Scene::new(Color::WHITE);
        let id = scene.add(unit_box("a"));
        assert_eq!(scene.len(), 1);
        assert_eq!(
            scene.get(id).and_then(Node::as_mesh).map(|m| m.name.as_str()),
            Some("a")
        );
        assert!(scene.get(NodeId::new()).is_none());
    }

    #[test]
    fn extend_preserves_order() {
        let mut scene = Scene::new(Color::WHITE);
        let ids = scene.extend(["a", "b", "c"].map(|n| Node::from(unit_box(n))));
        assert_eq!(ids.len(), 3);
        let names: Vec<_> = scene.meshes().map(|m| m.name.clone()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        let order: Vec<_> = scene.nodes().map(|(id, _)| id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn meshes_and_lights_are_partitioned() {
        let mut scene = Scene::new(Color::WHITE);
        scene.add(Light::Ambient {
            color: Color::WHITE,
            intensity: 1.0,
        });
        scene.add(unit_box("a"));
        assert_eq!(scene.meshes().count(), 1);
        assert_eq!(scene.lights().count(), 1);
    }
}
