use houseview_common::Color;

use crate::config::{HouseConfig, SKY_BLUE};
use crate::geometry::house;
use crate::graph::Scene;
use crate::lighting::lighting;

/// Assemble the complete scene: sky background, lights, then the house.
pub fn build_scene(cfg: &HouseConfig) -> Scene {
    let mut scene = Scene::new(Color::from_hex(SKY_BLUE));
    scene.extend(lighting());
    scene.extend(house(cfg));
    tracing::debug!(
        nodes = scene.len(),
        meshes = scene.meshes().count(),
        lights = scene.lights().count(),
        "scene built"
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Light, Shape};

    #[test]
    fn full_scene_has_nine_nodes() {
        let scene = build_scene(&HouseConfig::default());
        assert_eq!(scene.len(), 9);
        assert_eq!(scene.meshes().count(), 7);
        assert_eq!(scene.lights().count(), 2);
        assert_eq!(scene.background().to_hex(), SKY_BLUE);
    }

    #[test]
    fn lights_come_first() {
        let scene = build_scene(&HouseConfig::default());
        let kinds: Vec<bool> = scene.nodes().map(|(_, n)| n.as_light().is_some()).collect();
        assert_eq!(&kinds[..2], &[true, true]);
        assert!(kinds[2..].iter().all(|is_light| !is_light));
    }

    #[test]
    fn scene_contents_by_kind() {
        let scene = build_scene(&HouseConfig::default());
        let planes = scene
            .meshes()
            .filter(|m| matches!(m.shape, Shape::Plane { .. }))
            .count();
        let boxes = scene
            .meshes()
            .filter(|m| matches!(m.shape, Shape::Box { .. }))
            .count();
        assert_eq!(planes, 3);
        assert_eq!(boxes, 4);
        assert_eq!(
            scene
                .lights()
                .filter(|l| matches!(l, Light::Ambient { .. }))
                .count(),
            1
        );
    }
}
