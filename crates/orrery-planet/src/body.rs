//! Body descriptions. Speeds are degrees per simulated time unit; negative
//! values are retrograde.

use orrery_render::Color;

/// Which procedural generator paints a body's surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    #[default]
    Smooth,
    Cratered,
    Banded,
    EarthLike,
}

/// A moon orbiting in its planet's spinning frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Moon {
    /// Orbital radius around the planet.
    pub distance: f32,
    pub size: f32,
    pub orbit_speed: f32,
    pub color: Color,
}

/// A planet. Moons are owned and live exactly as long as the planet.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    /// Orbital radius around the star, `> 0`.
    pub distance: f32,
    /// Body radius, `> 0`.
    pub size: f32,
    pub orbit_speed: f32,
    pub rotation_speed: f32,
    /// Degrees between the spin axis and the orbital-plane normal.
    pub axial_tilt: f32,
    pub color: Color,
    pub moons: Vec<Moon>,
    pub has_rings: bool,
    pub surface: SurfaceKind,
}

impl CelestialBody {
    /// A smooth, untilted body with no moons or rings.
    pub fn new(name: impl Into<String>, distance: f32, size: f32, color: Color) -> Self {
        Self {
            name: name.into(),
            distance,
            size,
            orbit_speed: 0.0,
            rotation_speed: 0.0,
            axial_tilt: 0.0,
            color,
            moons: Vec::new(),
            has_rings: false,
            surface: SurfaceKind::Smooth,
        }
    }

    #[must_use]
    pub fn with_speeds(mut self, orbit_speed: f32, rotation_speed: f32) -> Self {
        self.orbit_speed = orbit_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    #[must_use]
    pub fn with_tilt(mut self, axial_tilt: f32) -> Self {
        self.axial_tilt = axial_tilt;
        self
    }

    #[must_use]
    pub fn with_surface(mut self, surface: SurfaceKind) -> Self {
        self.surface = surface;
        self
    }

    #[must_use]
    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }

    #[must_use]
    pub fn with_moon(mut self, moon: Moon) -> Self {
        self.moons.push(moon);
        self
    }
}

/// The central, self-lit star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub name: String,
    pub size: f32,
    pub color: Color,
}
