use glam::Vec2;

use crate::action::ControlAction;

/// Mouse buttons the controls react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Keyboard modifiers held while dragging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Dolly,
    Pan,
}

/// Tracks button and cursor state and turns pointer events into actions.
///
/// Left drag orbits (pans with shift or ctrl held), middle drag dollies,
/// right drag pans. The mode is fixed when the button goes down, so releasing
/// a modifier mid-drag does not switch from pan to orbit.
#[derive(Debug, Default)]
pub struct PointerTracker {
    drag: Option<(PointerButton, DragMode)>,
    last_position: Option<Vec2>,
    modifiers: Modifiers,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn button_pressed(&mut self, button: PointerButton) {
        if self.drag.is_some() {
            return;
        }
        let mode = match button {
            PointerButton::Left if self.modifiers.shift || self.modifiers.ctrl => DragMode::Pan,
            PointerButton::Left => DragMode::Rotate,
            PointerButton::Middle => DragMode::Dolly,
            PointerButton::Right => DragMode::Pan,
        };
        tracing::trace!(?button, ?mode, "drag started");
        self.drag = Some((button, mode));
    }

    pub fn button_released(&mut self, button: PointerButton) {
        if matches!(self.drag, Some((held, _)) if held == button) {
            self.drag = None;
        }
    }

    /// Cursor moved to `position`. Returns an action while dragging.
    pub fn moved(&mut self, position: Vec2) -> Option<ControlAction> {
        let previous = self.last_position.replace(position)?;
        let (_, mode) = self.drag?;
        let delta = position - previous;
        if delta == Vec2::ZERO {
            return None;
        }
        Some(match mode {
            DragMode::Rotate => ControlAction::Rotate(delta),
            DragMode::Pan => ControlAction::Pan(delta),
            // Dragging down moves away from the target.
            DragMode::Dolly => {
                if delta.y == 0.0 {
                    return None;
                }
                ControlAction::Zoom(-delta.y.signum())
            }
        })
    }

    /// Cursor left the window; the next move starts a fresh delta.
    pub fn left(&mut self) {
        self.last_position = None;
    }

    /// Wheel scrolled by `steps` lines; positive is away from the user.
    pub fn scrolled(&self, steps: f32) -> Option<ControlAction> {
        (steps != 0.0).then_some(ControlAction::Zoom(steps))
    }
}
