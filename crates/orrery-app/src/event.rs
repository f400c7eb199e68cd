//! Events delivered by the window backend.

use orrery_input::{ButtonState, KeyInput, PointerButton};

/// One host event. Pointer coordinates are window pixels with the origin at
/// the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    PointerButton {
        button: PointerButton,
        state: ButtonState,
        x: f32,
        y: f32,
    },
    PointerMoved {
        x: f32,
        y: f32,
    },
    /// Wheel movement in lines, positive away from the user.
    Scroll {
        lines: f32,
    },
    Key(KeyInput),
    Resize {
        width: u32,
        height: u32,
    },
    /// The fixed-interval timer fired.
    Timer,
}

impl HostEvent {
    /// Primary button press at `(x, y)`.
    pub fn press(x: f32, y: f32) -> Self {
        HostEvent::PointerButton {
            button: PointerButton::Primary,
            state: ButtonState::Pressed,
            x,
            y,
        }
    }

    /// Primary button release at `(x, y)`.
    pub fn release(x: f32, y: f32) -> Self {
        HostEvent::PointerButton {
            button: PointerButton::Primary,
            state: ButtonState::Released,
            x,
            y,
        }
    }
}
