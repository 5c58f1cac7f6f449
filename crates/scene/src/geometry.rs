//! Fixed house geometry.
//!
//! Every builder is a pure function of `HouseConfig`. The roof pitch
//! (`PI / 2.7`) and the ridge offset divisor (`2.2`) are independent,
//! hand-tuned constants: the two halves are not solved to meet exactly at the
//! ridge, and must not be.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use houseview_common::{Color, Transform};

use crate::config::HouseConfig;
use crate::node::{Material, Mesh, Node, Shape, Side};

pub const GROUND_COLOR: u32 = 0xA0A0A0;
/// Mud brown.
pub const WALL_COLOR: u32 = 0x7C4F30;
pub const ROOF_COLOR: u32 = 0x8B0000;

/// Roof slope divisor: each half is tilted by `PI / ROOF_PITCH_DIVISOR`.
pub const ROOF_PITCH_DIVISOR: f32 = 2.7;
/// Ridge offset divisor: each half sits `roof_depth / ROOF_OFFSET_DIVISOR` from the ridge line.
pub const ROOF_OFFSET_DIVISOR: f32 = 2.2;

/// Flat floor covering the footprint, lying in the XZ plane at height 0.
pub fn ground(cfg: &HouseConfig) -> Mesh {
    Mesh::new(
        "ground",
        Shape::Plane {
            width: cfg.boundary_width,
            height: cfg.boundary_height,
        },
        Material::new(Color::from_hex(GROUND_COLOR), Side::Double),
        Transform::from_rotation_x(-FRAC_PI_2, Vec3::ZERO),
    )
}

/// The four perimeter walls: front, back, left, right.
pub fn walls(cfg: &HouseConfig) -> [Mesh; 4] {
    let material = Material::new(Color::from_hex(WALL_COLOR), Side::Front);
    let w = cfg.boundary_width;
    let d = cfg.boundary_height;
    let h = cfg.wall_height;
    let t = cfg.wall_thickness;

    let span_width = Shape::Box {
        width: w,
        height: h,
        depth: t,
    };
    let span_depth = Shape::Box {
        width: t,
        height: h,
        depth: d,
    };

    [
        Mesh::new(
            "wall_front",
            span_width,
            material,
            Transform::from_position(Vec3::new(0.0, h / 2.0, -d / 2.0)),
        ),
        Mesh::new(
            "wall_back",
            span_width,
            material,
            Transform::from_position(Vec3::new(0.0, h / 2.0, d / 2.0)),
        ),
        Mesh::new(
            "wall_left",
            span_depth,
            material,
            Transform::from_position(Vec3::new(-w / 2.0, h / 2.0, 0.0)),
        ),
        Mesh::new(
            "wall_right",
            span_depth,
            material,
            Transform::from_position(Vec3::new(w / 2.0, h / 2.0, 0.0)),
        ),
    ]
}

/// Which half of the gable roof to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoofSide {
    /// Tilted by `+PI / 2.7`, placed toward -Z.
    Back,
    /// Tilted by `-PI / 2.7`, placed toward +Z.
    Front,
}

impl RoofSide {
    fn sign(self) -> f32 {
        match self {
            RoofSide::Back => 1.0,
            RoofSide::Front => -1.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            RoofSide::Back => "roof_back",
            RoofSide::Front => "roof_front",
        }
    }
}

/// One slanted roof plane.
pub fn roof_half(cfg: &HouseConfig, side: RoofSide) -> Mesh {
    let depth = cfg.roof_depth();
    let sign = side.sign();
    Mesh::new(
        side.name(),
        Shape::Plane {
            width: cfg.boundary_width,
            height: depth,
        },
        Material::new(Color::from_hex(ROOF_COLOR), Side::Double),
        Transform::from_rotation_x(
            sign * PI / ROOF_PITCH_DIVISOR,
            Vec3::new(
                0.0,
                cfg.wall_height + cfg.roof_height / 2.0,
                -sign * depth / ROOF_OFFSET_DIVISOR,
            ),
        ),
    )
}

/// Both roof halves, back then front.
pub fn roof(cfg: &HouseConfig) -> [Mesh; 2] {
    [roof_half(cfg, RoofSide::Back), roof_half(cfg, RoofSide::Front)]
}

/// Ground, walls and roof in draw order.
pub fn house(cfg: &HouseConfig) -> Vec<Node> {
    std::iter::once(ground(cfg))
        .chain(walls(cfg))
        .chain(roof(cfg))
        .map(Node::from)
        .collect()
}
