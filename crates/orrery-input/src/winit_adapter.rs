//! Conversions from winit event types, for hosts built on winit.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey as WinitNamedKey};

use crate::{ButtonState, KeyInput, NamedKey, PointerButton};

/// Pixels per wheel line for touchpads that report pixel deltas.
const PIXELS_PER_LINE: f64 = 40.0;

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(id) => PointerButton::Other(id),
        }
    }
}

impl From<ElementState> for ButtonState {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => ButtonState::Pressed,
            ElementState::Released => ButtonState::Released,
        }
    }
}

/// Converts a logical winit key. Keys the orrery never binds map to `None`.
pub fn key_input(key: &Key) -> Option<KeyInput> {
    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyInput::Char(c)),
                _ => None,
            }
        }
        Key::Named(WinitNamedKey::Space) => Some(KeyInput::Char(' ')),
        Key::Named(WinitNamedKey::Escape) => Some(KeyInput::Named(NamedKey::Escape)),
        Key::Named(WinitNamedKey::ArrowLeft) => Some(KeyInput::Named(NamedKey::ArrowLeft)),
        Key::Named(WinitNamedKey::ArrowRight) => Some(KeyInput::Named(NamedKey::ArrowRight)),
        Key::Named(WinitNamedKey::ArrowUp) => Some(KeyInput::Named(NamedKey::ArrowUp)),
        Key::Named(WinitNamedKey::ArrowDown) => Some(KeyInput::Named(NamedKey::ArrowDown)),
        _ => None,
    }
}

/// Wheel delta in lines.
pub fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_x, y) => y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_left_button_is_primary() {
        assert_eq!(PointerButton::from(MouseButton::Left), PointerButton::Primary);
        assert_eq!(
            PointerButton::from(MouseButton::Other(9)),
            PointerButton::Other(9)
        );
    }

    #[test]
    fn test_element_state() {
        assert_eq!(ButtonState::from(ElementState::Pressed), ButtonState::Pressed);
    }

    #[test]
    fn test_character_and_named_keys() {
        assert_eq!(
            key_input(&Key::Character("+".into())),
            Some(KeyInput::Char('+'))
        );
        assert_eq!(
            key_input(&Key::Named(WinitNamedKey::Space)),
            Some(KeyInput::Char(' '))
        );
        assert_eq!(
            key_input(&Key::Named(WinitNamedKey::Escape)),
            Some(KeyInput::Named(NamedKey::Escape))
        );
        assert_eq!(key_input(&Key::Named(WinitNamedKey::F1)), None);
    }

    #[test]
    fn test_scroll_pixel_delta_normalized() {
        let lines = scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0)));
        assert!((lines - 2.0).abs() < 1e-6);
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, -1.0)), -1.0);
    }
}
