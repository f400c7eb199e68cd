//! Shared widget geometry and the capabilities widgets act through.

use glam::Vec2;
use orrery_input::Command;

/// Axis-aligned rectangle, origin at its bottom-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Read/write access to a scalar a slider is bound to. The slider never
/// owns the value.
pub trait ValueBinding {
    fn value(&self) -> f32;
    fn set_value(&mut self, value: f32);
}

/// Executes a button's action.
pub trait ActionHandler {
    fn activate(&mut self, action: Command);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges_and_outside() {
        let r = Rect::new(10.0, 20.0, 100.0, 30.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 50.0)));
        assert!(r.contains(r.center()));
        assert!(!r.contains(Vec2::new(9.9, 25.0)));
        assert!(!r.contains(Vec2::new(50.0, 50.1)));
    }
}
