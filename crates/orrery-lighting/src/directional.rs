//! Directional sun light with a manual Lambertian term.
//!
//! Surfaces that bake their own shading compute
//! `intensity = max(ambient_floor, dot(normal, to_sun))` per vertex and
//! multiply it into the vertex color, bypassing the backend's lighting.

use glam::Vec3;
use orrery_render::Color;

/// Lowest intensity any vertex receives, so the night side is never black.
pub const DEFAULT_AMBIENT_FLOOR: f32 = 0.2;

/// An infinitely distant light expressed in a body's local (spin) frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SunLight {
    /// Unit vector pointing from the surface TOWARD the sun.
    to_sun: Vec3,
    /// Intensity floor in `[0, 1]`.
    ambient_floor: f32,
}

impl Default for SunLight {
    fn default() -> Self {
        Self {
            // Fixed in the body's spin frame: the baked shading turns with
            // the body's tilt and spin. -X matches the sun's side at zero
            // spin, lifted slightly so the poles are not edge-on.
            to_sun: Vec3::new(-1.0, 0.25, 0.0).normalize(),
            ambient_floor: DEFAULT_AMBIENT_FLOOR,
        }
    }
}

impl SunLight {
    /// Creates a light. A zero-length direction keeps the default direction
    /// and the floor is clamped to `[0, 1]`.
    pub fn new(to_sun: Vec3, ambient_floor: f32) -> Self {
        let mut light = Self {
            ambient_floor: ambient_floor.clamp(0.0, 1.0),
            ..Self::default()
        };
        light.set_direction(to_sun);
        light
    }

    /// Sets the direction toward the sun, normalizing it. Returns `false`
    /// and leaves the light unchanged if `dir` has near-zero length.
    pub fn set_direction(&mut self, dir: Vec3) -> bool {
        match dir.try_normalize() {
            Some(unit) => {
                self.to_sun = unit;
                true
            }
            None => false,
        }
    }

    /// Same direction with a different floor, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_ambient_floor(mut self, ambient_floor: f32) -> Self {
        self.ambient_floor = ambient_floor.clamp(0.0, 1.0);
        self
    }

    pub fn direction(&self) -> Vec3 {
        self.to_sun
    }

    pub fn ambient_floor(&self) -> f32 {
        self.ambient_floor
    }

    /// Lambertian intensity for a unit surface normal.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.to_sun).max(self.ambient_floor)
    }

    /// `base` shaded by [`intensity`](Self::intensity).
    pub fn shade(&self, base: Color, normal: Vec3) -> Color {
        base.scaled(self.intensity(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let light = SunLight::default();
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
        let light = SunLight::new(Vec3::new(3.0, -4.0, 0.0), 0.2);
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_direction_is_rejected() {
        let mut light = SunLight::default();
        let before = light.direction();
        assert!(!light.set_direction(Vec3::ZERO));
        assert_eq!(light.direction(), before);
    }

    #[test]
    fn test_facing_normal_is_full_intensity() {
        let light = SunLight::new(Vec3::X, 0.2);
        assert!((light.intensity(Vec3::X) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_with_ambient_floor_keeps_direction() {
        let light = SunLight::default().with_ambient_floor(1.5);
        assert_eq!(light.ambient_floor(), 1.0);
        assert_eq!(light.direction(), SunLight::default().direction());
    }

    #[test]
    fn test_back_face_gets_ambient_floor() {
        let light = SunLight::new(Vec3::X, 0.2);
        assert!((light.intensity(-Vec3::X) - 0.2).abs() < 1e-6);
        assert!((light.intensity(Vec3::Y) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_oblique_normal_is_cosine() {
        let light = SunLight::new(Vec3::X, 0.0);
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((light.intensity(n) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_shade_never_black() {
        let light = SunLight::default();
        let c = light.shade(Color::new(1.0, 0.8, 0.4), -light.direction());
        assert!(c.r > 0.0 && c.g > 0.0 && c.b > 0.0);
    }

    #[test]
    fn test_floor_is_clamped() {
        assert_eq!(SunLight::new(Vec3::X, 3.0).ambient_floor(), 1.0);
        assert_eq!(SunLight::new(Vec3::X, -1.0).ambient_floor(), 0.0);
    }
}
