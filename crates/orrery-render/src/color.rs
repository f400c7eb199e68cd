//! Linear RGB color with components in `[0, 1]`.

use glam::Vec3;

/// Normalized RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);

    /// Creates a color from raw components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Multiplies every component by `factor`, clamping to `[0, 1]`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(
            (self.r * factor).clamp(0.0, 1.0),
            (self.g * factor).clamp(0.0, 1.0),
            (self.b * factor).clamp(0.0, 1.0),
        )
    }

    /// Component array for vertex upload.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Color> for Vec3 {
    fn from(c: Color) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_darkens() {
        let c = Color::new(1.0, 0.5, 0.2).scaled(0.85);
        assert!((c.r - 0.85).abs() < 1e-6);
        assert!((c.g - 0.425).abs() < 1e-6);
        assert!((c.b - 0.17).abs() < 1e-6);
    }

    #[test]
    fn test_scaled_clamps() {
        let c = Color::new(0.8, 0.9, 1.0).scaled(2.0);
        assert_eq!(c, Color::WHITE);
        assert_eq!(Color::WHITE.scaled(-1.0), Color::BLACK);
    }
}
