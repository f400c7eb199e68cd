//! Orbit guide rasterization with the integer midpoint-circle algorithm.
//!
//! The world radius is scaled into an integer grid (`R = round(r * scale)`),
//! one octant is walked with the classic decision variable, and every step
//! emits its eight reflections. Points come back in generation order, not
//! angular order, so they are drawn as a point cloud rather than a line loop.

use glam::Vec3;

/// Grid units per world unit.
pub const DEFAULT_ORBIT_SCALE: f32 = 100.0;

/// Walks one octant of a circle of integer radius `radius` and returns all
/// eight reflections of each step, in emission order.
///
/// Non-positive radii yield no points.
#[must_use]
pub fn midpoint_circle(radius: i64) -> Vec<(i64, i64)> {
    if radius <= 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(octant_len(radius) * 8);
    let mut x: i64 = 0;
    let mut y: i64 = radius;
    let mut decision: i64 = 1 - radius;

    while x <= y {
        points.extend_from_slice(&[
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ]);

        x += 1;
        if decision < 0 {
            decision += 2 * x + 1;
        } else {
            y -= 1;
            decision += 2 * (x - y) + 1;
        }
    }

    points
}

/// Upper bound on the steps of one octant, used for pre-allocation.
fn octant_len(radius: i64) -> usize {
    (radius as f64 / std::f64::consts::SQRT_2).ceil() as usize + 1
}

/// Produces orbit guide points in the orbital (XZ) plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPathRasterizer {
    /// Grid units per world unit. Quantization error is at most `0.5 / scale`.
    pub scale: f32,
}

impl Default for OrbitPathRasterizer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_ORBIT_SCALE,
        }
    }
}

impl OrbitPathRasterizer {
    /// Creates a rasterizer with the given grid scale. Non-positive scales
    /// fall back to [`DEFAULT_ORBIT_SCALE`].
    #[must_use]
    pub fn new(scale: f32) -> Self {
        let scale = if scale > 0.0 && scale.is_finite() {
            scale
        } else {
            DEFAULT_ORBIT_SCALE
        };
        Self { scale }
    }

    /// Integer radius for a world radius.
    #[must_use]
    pub fn grid_radius(&self, radius: f32) -> i64 {
        (radius * self.scale).round() as i64
    }

    /// Rasterizes a circle of world radius `radius` centred on the origin,
    /// returning points with `y = 0`.
    #[must_use]
    pub fn rasterize(&self, radius: f32) -> Vec<Vec3> {
        midpoint_circle(self.grid_radius(radius))
            .into_iter()
            .map(|(x, z)| Vec3::new(x as f32 / self.scale, 0.0, z as f32 / self.scale))
            .collect()
    }
}
