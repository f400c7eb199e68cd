//! Procedural surface generators.
//!
//! Every generator is a pure function of `(radius, base color, random
//! stream)` returning a small [`SceneNode`] subtree in the body's spinning
//! frame. None of them read camera or clock state, so the scene can build a
//! body's surface once and reuse it every frame.

mod banded;
mod cratered;
mod earth_like;
mod smooth;

pub use banded::BandedSurface;
pub use cratered::{CrateredSurface, crater_seed};
pub use earth_like::{CONTINENTS, Continent, EarthLikeSurface};
pub use smooth::SmoothSurface;

use orrery_lighting::SunLight;
use orrery_math::RandomSequence;
use orrery_render::{Color, Primitive, SceneNode, Transform};

use crate::SurfaceKind;

/// Thickness of a decorative patch along the radial axis, relative to its
/// width.
pub const PATCH_FLATTEN: f32 = 0.1;

/// Produces the draw tree for one body's surface.
pub trait SurfaceGenerator {
    fn generate(&self, radius: f32, base: Color, rng: &mut RandomSequence) -> SceneNode;
}

/// Tunables shared by all generators.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSettings {
    pub sphere_slices: u32,
    pub sphere_stacks: u32,
    pub crater_count: u32,
    /// Crater radius range as fractions of the body radius.
    pub crater_size: (f32, f32),
    pub band_stacks: u32,
    pub band_slices: u32,
    /// `Some` to bake Lambertian shading into banded vertex colors.
    pub lighting: Option<SunLight>,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            sphere_slices: 20,
            sphere_stacks: 20,
            crater_count: 12,
            crater_size: (0.15, 0.25),
            band_stacks: 40,
            band_slices: 40,
            lighting: Some(SunLight::default()),
        }
    }
}

/// Runs the generator matching `kind`.
pub fn generate_surface(
    kind: SurfaceKind,
    settings: &SurfaceSettings,
    radius: f32,
    base: Color,
    rng: &mut RandomSequence,
) -> SceneNode {
    match kind {
        SurfaceKind::Smooth => SmoothSurface::from_settings(settings).generate(radius, base, rng),
        SurfaceKind::Cratered => {
            CrateredSurface::from_settings(settings).generate(radius, base, rng)
        }
        SurfaceKind::Banded => BandedSurface::from_settings(settings).generate(radius, base, rng),
        SurfaceKind::EarthLike => {
            EarthLikeSurface::from_settings(settings).generate(radius, base, rng)
        }
    }
}

/// A lit sphere primitive.
pub(crate) fn sphere(radius: f32, slices: u32, stacks: u32, color: Color) -> Primitive {
    Primitive::Sphere {
        radius,
        slices,
        stacks,
        color,
        lit: true,
    }
}

/// A flattened sphere lying on the surface.
///
/// `azimuth_deg` turns about the spin axis, `polar_deg` tips away from the
/// north pole (0 = north, 180 = south). The patch is pushed out to the
/// surface along the local +Y axis and squashed along that same axis.
pub(crate) fn surface_patch(
    azimuth_deg: f32,
    polar_deg: f32,
    body_radius: f32,
    patch_radius: f32,
    color: Color,
    tessellation: (u32, u32),
) -> SceneNode {
    SceneNode::new()
        .with_transform(Transform::rotate_y(azimuth_deg))
        .with_transform(Transform::rotate_x(polar_deg))
        .with_transform(Transform::Translate(glam::Vec3::new(0.0, body_radius, 0.0)))
        .with_transform(Transform::Scale(glam::Vec3::new(1.0, PATCH_FLATTEN, 1.0)))
        .with_primitive(sphere(patch_radius, tessellation.0, tessellation.1, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};

    #[test]
    fn test_patch_sits_on_surface() {
        for &(az, polar) in &[(0.0, 0.0), (90.0, 45.0), (200.0, 170.0)] {
            let node = surface_patch(az, polar, 2.0, 0.3, Color::WHITE, (8, 8));
            let centre = node.local_matrix().transform_point3(Vec3::ZERO);
            assert!((centre.length() - 2.0).abs() < 1e-5, "{centre:?}");
        }
    }

    #[test]
    fn test_patch_is_flat_along_radius() {
        let node = surface_patch(30.0, 60.0, 1.0, 0.2, Color::WHITE, (8, 8));
        let m = node.local_matrix();
        let centre = m.transform_point3(Vec3::ZERO);
        let radial = m.transform_vector3(Vec3::Y);
        let tangent = m.transform_vector3(Vec3::X);
        assert!((radial.length() - PATCH_FLATTEN).abs() < 1e-5);
        assert!((tangent.length() - 1.0).abs() < 1e-5);
        assert!(radial.normalize().abs_diff_eq(centre.normalize(), 1e-5));
    }

    #[test]
    fn test_dispatch_covers_every_kind() {
        let settings = SurfaceSettings::default();
        let mut rng = RandomSequence::new(1);
        for kind in [
            SurfaceKind::Smooth,
            SurfaceKind::Cratered,
            SurfaceKind::Banded,
            SurfaceKind::EarthLike,
        ] {
            let node = generate_surface(kind, &settings, 0.5, Color::WHITE, &mut rng);
            assert!(node.primitive_count() > 0, "{kind:?} drew nothing");
            let mut finite = true;
            node.visit(Mat4::IDENTITY, &mut |m, _| finite &= m.is_finite());
            assert!(finite);
        }
    }
}
