use glam::Vec3;
use houseview_common::Color;

use crate::node::{Light, Node};

pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const SUN_INTENSITY: f32 = 0.5;
pub const SUN_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Soft white fill plus a white sun at (10, 10, 10).
///
/// Returns the lights for the caller to add; calling this twice and adding
/// both results gives the scene four lights.
pub fn lighting() -> Vec<Node> {
    vec![
        Light::Ambient {
            color: Color::WHITE,
            intensity: AMBIENT_INTENSITY,
        }
        .into(),
        Light::Directional {
            color: Color::WHITE,
            intensity: SUN_INTENSITY,
            position: SUN_POSITION,
        }
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ambient_one_directional() {
        let lights = lighting();
        assert_eq!(lights.len(), 2);
        assert_eq!(
            lights[0].as_light(),
            Some(&Light::Ambient {
                color: Color::WHITE,
                intensity: 0.7
            })
        );
        match lights[1].as_light() {
            Some(Light::Directional {
                color,
                intensity,
                position,
            }) => {
                assert_eq!(*color, Color::WHITE);
                assert_eq!(*intensity, 0.5);
                assert_eq!(*position, Vec3::new(10.0, 10.0, 10.0));
            }
            other => panic!("expected directional light, got {other:?}"),
        }
    }
}
