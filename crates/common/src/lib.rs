//! Shared value types used by every houseview crate.
//!
//! # Invariants
//! - Types here are plain values: no GPU handles, no window handles.
//! - Colors are stored as sRGB components; conversion to linear happens at the GPU boundary.

mod types;

pub use types::{Color, NodeId, Transform, Viewport};
