//! Cratered surface: a base sphere plus darker flattened patches at
//! pseudo-random orientations.

use orrery_math::RandomSequence;
use orrery_render::{Color, SceneNode};
use tracing::trace;

use super::{SurfaceGenerator, SurfaceSettings, sphere, surface_patch};

/// Crater tint relative to the base color.
const CRATER_SHADE: f32 = 0.6;

/// Seed for a body's crater layout. Layouts depend only on the body radius,
/// never on draw order or other bodies.
pub fn crater_seed(radius: f32) -> u64 {
    (radius.abs() * 1000.0).round() as u64
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrateredSurface {
    pub slices: u32,
    pub stacks: u32,
    pub crater_count: u32,
    /// Crater radius as a fraction of the body radius, `[min, max)`.
    pub crater_size: (f32, f32),
}

impl CrateredSurface {
    pub fn from_settings(settings: &SurfaceSettings) -> Self {
        Self {
            slices: settings.sphere_slices,
            stacks: settings.sphere_stacks,
            crater_count: settings.crater_count,
            crater_size: settings.crater_size,
        }
    }
}

impl SurfaceGenerator for CrateredSurface {
    /// Reseeds `rng` from [`crater_seed`] before drawing, so the stream is
    /// reset explicitly on every call.
    fn generate(&self, radius: f32, base: Color, rng: &mut RandomSequence) -> SceneNode {
        let seed = crater_seed(radius);
        rng.reseed(seed);
        trace!(seed, count = self.crater_count, "generating crater layout");

        let crater_color = base.scaled(CRATER_SHADE);
        let patch_tess = ((self.slices / 2).max(4), (self.stacks / 2).max(4));
        let (min_frac, max_frac) = self.crater_size;

        let mut node = SceneNode::named("surface")
            .with_primitive(sphere(radius, self.slices, self.stacks, base));
        for _ in 0..self.crater_count {
            let azimuth = rng.next_f32(0.0, 360.0);
            let polar = rng.next_f32(0.0, 180.0);
            let fraction = rng.next_f32(min_frac, max_frac);
            node.push_child(surface_patch(
                azimuth,
                polar,
                radius,
                radius * fraction,
                crater_color,
                patch_tess,
            ));
        }
        node
    }
}
