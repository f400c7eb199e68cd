//! Pointer state tracker.
//!
//! [`PointerState`] keeps the cursor in window pixels (origin top-left, as
//! the window backend reports it) and converts to HUD coordinates (origin
//! bottom-left) on request. Wheel movement accumulates until the frame
//! consumes it.

use glam::Vec2;

/// Pointer buttons the core distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Converts a top-left-origin y coordinate to bottom-left origin.
#[must_use]
pub fn flip_y(y: f32, viewport_height: u32) -> f32 {
    viewport_height.max(1) as f32 - y
}

/// Frame-coherent pointer state.
///
/// # Usage
///
/// 1. Forward backend events via the `on_*` methods.
/// 2. Query state with the public accessors.
/// 3. Drain the wheel with [`take_scroll`](Self::take_scroll) once per frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Vec2,
    primary_down: bool,
    scroll: f32,
}

impl PointerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Event handlers ──────────────────────────────────────────────

    /// Process a cursor move in window pixels.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Process a button event; the event position also updates the cursor.
    pub fn on_button(&mut self, button: PointerButton, state: ButtonState, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        if button == PointerButton::Primary {
            self.primary_down = state == ButtonState::Pressed;
        }
    }

    /// Process a wheel event in lines (positive = away from the user).
    pub fn on_scroll(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Returns the accumulated wheel lines and resets them to zero.
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Cursor position in window pixels, origin top-left.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Cursor position with origin bottom-left.
    #[must_use]
    pub fn hud_position(&self, viewport_height: u32) -> Vec2 {
        Vec2::new(self.position.x, flip_y(self.position.y, viewport_height))
    }

    #[must_use]
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Wheel lines accumulated since the last drain.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }
}
