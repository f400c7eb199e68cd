//! Horizontal value slider.

use glam::Vec2;

use crate::{Rect, ValueBinding};

/// A slider whose thumb maps `[0, 1]` onto `[min, max]` of a bound value.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    /// The track.
    pub bounds: Rect,
    pub label: String,
    /// Normalized thumb position, always in `[0, 1]`.
    thumb: f32,
    min: f32,
    max: f32,
    /// Extra hit area above the track, where the thumb is drawn.
    pub hit_margin: f32,
    dragging: bool,
}

impl Slider {
    /// Creates a slider over `[min, max]`. A reversed range is swapped.
    pub fn new(label: impl Into<String>, bounds: Rect, min: f32, max: f32, hit_margin: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            bounds,
            label: label.into(),
            thumb: 0.0,
            min,
            max,
            hit_margin: hit_margin.max(0.0),
            dragging: false,
        }
    }

    pub fn thumb(&self) -> f32 {
        self.thumb
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Value at the current thumb position.
    pub fn value(&self) -> f32 {
        self.min + self.thumb * (self.max - self.min)
    }

    /// Whether `p` lands on the track or the margin above it.
    pub fn hit(&self, p: Vec2) -> bool {
        let area = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height + self.hit_margin,
        );
        area.contains(p)
    }

    /// Moves the thumb under `pointer_x` and writes the value through
    /// `binding`. Returns the value written.
    pub fn drag_to<B: ValueBinding + ?Sized>(&mut self, pointer_x: f32, binding: &mut B) -> f32 {
        self.thumb = if self.bounds.width > 0.0 {
            ((pointer_x - self.bounds.x) / self.bounds.width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let value = self.value();
        binding.set_value(value);
        value
    }

    /// Re-reads the bound value, e.g. after a key changed it.
    pub fn sync<B: ValueBinding + ?Sized>(&mut self, binding: &B) {
        let span = self.max - self.min;
        self.thumb = if span > 0.0 {
            ((binding.value() - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Centre of the thumb in HUD pixels.
    pub fn thumb_center(&self) -> Vec2 {
        Vec2::new(
            self.bounds.x + self.thumb * self.bounds.width,
            self.bounds.y + self.bounds.height * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Speed(f32);

    impl ValueBinding for Speed {
        fn value(&self) -> f32 {
            self.0
        }
        fn set_value(&mut self, value: f32) {
            self.0 = value;
        }
    }

    fn slider() -> Slider {
        Slider::new("Speed", Rect::new(10.0, 10.0, 200.0, 8.0), 0.0, 3.0, 8.0)
    }

    #[test]
    fn test_right_edge_is_max() {
        let mut s = slider();
        let mut speed = Speed(1.0);
        assert_eq!(s.drag_to(210.0, &mut speed), 3.0);
        assert_eq!(speed.0, 3.0);
    }

    #[test]
    fn test_left_edge_is_min() {
        let mut s = slider();
        let mut speed = Speed(1.0);
        assert_eq!(s.drag_to(10.0, &mut speed), 0.0);
        assert_eq!(speed.0, 0.0);
    }

    #[test]
    fn test_beyond_track_clamps() {
        let mut s = slider();
        let mut speed = Speed(1.0);
        s.drag_to(-500.0, &mut speed);
        assert_eq!(s.thumb(), 0.0);
        s.drag_to(5000.0, &mut speed);
        assert_eq!(s.thumb(), 1.0);
        assert_eq!(speed.0, 3.0);
    }

    #[test]
    fn test_midpoint() {
        let mut s = slider();
        let mut speed = Speed(0.0);
        s.drag_to(110.0, &mut speed);
        assert!((speed.0 - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_sync_reads_binding() {
        let mut s = slider();
        s.sync(&Speed(0.75));
        assert!((s.thumb() - 0.25).abs() < 1e-6);
        s.sync(&Speed(99.0));
        assert_eq!(s.thumb(), 1.0);
    }

    #[test]
    fn test_hit_includes_margin_above_track() {
        let s = slider();
        assert!(s.hit(Vec2::new(50.0, 12.0)));
        assert!(s.hit(Vec2::new(50.0, 25.0)));
        assert!(!s.hit(Vec2::new(50.0, 27.0)));
        assert!(!s.hit(Vec2::new(50.0, 9.0)));
    }

    #[test]
    fn test_reversed_range_swapped() {
        assert_eq!(
            Slider::new("x", Rect::default(), 3.0, 0.0, 0.0).range(),
            (0.0, 3.0)
        );
    }
}
