use glam::Vec2;

/// A camera control request produced from pointer input.
///
/// Drag deltas are in physical pixels; the controls scale them by the
/// viewport height so the feel is resolution independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Orbit around the target by a pointer drag delta.
    Rotate(Vec2),
    /// Move the target by a pointer drag delta.
    Pan(Vec2),
    /// Dolly toward (positive) or away from (negative) the target, in wheel steps.
    Zoom(f32),
}
