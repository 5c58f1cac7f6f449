use houseview_input::{Modifiers, PointerButton};
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::ModifiersState;

/// Pixels of touchpad scroll counted as one wheel line.
const PIXELS_PER_LINE: f64 = 50.0;

pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

pub fn modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        ctrl: state.control_key(),
    }
}

/// Wheel lines scrolled; positive is away from the user.
pub fn scroll_steps(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn maps_known_buttons() {
        assert_eq!(pointer_button(MouseButton::Left), Some(PointerButton::Left));
        assert_eq!(pointer_button(MouseButton::Middle), Some(PointerButton::Middle));
        assert_eq!(pointer_button(MouseButton::Right), Some(PointerButton::Right));
        assert_eq!(pointer_button(MouseButton::Back), None);
        assert_eq!(pointer_button(MouseButton::Other(7)), None);
    }

    #[test]
    fn maps_modifiers() {
        let held = modifiers(ModifiersState::SHIFT | ModifiersState::CONTROL);
        assert!(held.shift && held.ctrl);
        assert_eq!(modifiers(ModifiersState::ALT), Modifiers::default());
    }

    #[test]
    fn scroll_lines_and_pixels() {
        assert_eq!(scroll_steps(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        assert_eq!(
            scroll_steps(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -100.0))),
            -2.0
        );
    }
}
