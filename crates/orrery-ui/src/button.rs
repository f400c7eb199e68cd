use orrery_input::Command;

use crate::Rect;

/// A clickable HUD button.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub bounds: Rect,
    pub label: String,
    /// Held down since the last press; cleared on any release.
    pub pressed: bool,
    pub action: Command,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Command, bounds: Rect) -> Self {
        Self {
            bounds,
            label: label.into(),
            pressed: false,
            action,
        }
    }
}
