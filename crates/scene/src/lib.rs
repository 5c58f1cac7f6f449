//! Scene model: configuration constants, node types, the scene graph and the
//! builders that populate it with the house.
//!
//! # Invariants
//! - Builders are pure: same `HouseConfig` in, same nodes out.
//! - Nodes are never removed or mutated once added to a `Scene`.
//! - The scene graph owns every node it holds.

pub mod config;
pub mod geometry;
pub mod graph;
pub mod lighting;
pub mod node;
mod setup;

pub use config::{ConfigError, HouseConfig, SKY_BLUE};
pub use geometry::{RoofSide, ground, house, roof, roof_half, walls};
pub use graph::Scene;
pub use lighting::lighting;
pub use node::{Light, Material, Mesh, Node, Shape, Side};
pub use setup::build_scene;
