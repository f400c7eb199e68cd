//! Banded gas-giant surface built as latitude quad strips.
//!
//! Every four latitude stacks alternate between the base color and an 0.85x
//! darker shade. With a [`SunLight`] the generator also multiplies each
//! vertex color by its Lambertian intensity and marks the strips unlit, so the
//! backend draws the precomputed colors as-is.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use orrery_lighting::SunLight;
use orrery_math::RandomSequence;
use orrery_render::{Color, ColoredVertex, Primitive, SceneNode};

use super::{SurfaceGenerator, SurfaceSettings};

/// Stacks per band.
const BAND_HEIGHT: u32 = 4;
/// Shade factor of the darker bands.
const DARK_BAND: f32 = 0.85;

#[derive(Clone, Debug, PartialEq)]
pub struct BandedSurface {
    pub stacks: u32,
    pub slices: u32,
    pub lighting: Option<SunLight>,
}

impl BandedSurface {
    pub fn from_settings(settings: &SurfaceSettings) -> Self {
        Self {
            stacks: settings.band_stacks.max(2),
            slices: settings.band_slices.max(3),
            lighting: settings.lighting.clone(),
        }
    }

    /// Unshaded color of a latitude stack.
    pub fn band_color(stack: u32, base: Color) -> Color {
        if (stack / BAND_HEIGHT) % 2 == 0 {
            base
        } else {
            base.scaled(DARK_BAND)
        }
    }

    fn vertex(&self, latitude: f32, longitude: f32, radius: f32, band: Color) -> ColoredVertex {
        let normal = Vec3::new(
            longitude.cos() * latitude.cos(),
            latitude.sin(),
            longitude.sin() * latitude.cos(),
        );
        let color = match &self.lighting {
            Some(light) => light.shade(band, normal),
            None => band,
        };
        ColoredVertex::new(normal * radius, normal, color)
    }
}

impl SurfaceGenerator for BandedSurface {
    fn generate(&self, radius: f32, base: Color, _rng: &mut RandomSequence) -> SceneNode {
        let mut node = SceneNode::named("surface");
        for stack in 0..self.stacks {
            let lat0 = PI * (-0.5 + stack as f32 / self.stacks as f32);
            let lat1 = PI * (-0.5 + (stack + 1) as f32 / self.stacks as f32);
            let band = Self::band_color(stack, base);

            let mut vertices = Vec::with_capacity((self.slices as usize + 1) * 2);
            for slice in 0..=self.slices {
                let longitude = TAU * slice as f32 / self.slices as f32;
                vertices.push(self.vertex(lat0, longitude, radius, band));
                vertices.push(self.vertex(lat1, longitude, radius, band));
            }
            node.primitives.push(Primitive::QuadStrip {
                vertices: vertices.into(),
                lit: self.lighting.is_none(),
            });
        }
        node
    }
}
