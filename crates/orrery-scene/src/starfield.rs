//! Background stars on a fixed shell around the origin.

use std::sync::Arc;

use glam::Vec3;
use orrery_math::RandomSequence;
use orrery_render::{Color, Primitive};

const STAR_POINT_SIZE: f32 = 1.5;

/// A point cloud generated once from its own seed, so the sky looks the
/// same every run regardless of anything else that draws random numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    points: Arc<[Vec3]>,
}

impl Starfield {
    /// Places `count` stars uniformly on a sphere of `radius`.
    pub fn generate(count: usize, radius: f32, seed: u64) -> Self {
        let mut rng = RandomSequence::new(seed);
        let points = (0..count)
            .map(|_| {
                let azimuth = rng.next_f32(0.0, std::f32::consts::TAU);
                // Uniform in height gives uniform area on the sphere.
                let y = rng.next_f32(-1.0, 1.0);
                let ring = (1.0 - y * y).max(0.0).sqrt();
                Vec3::new(ring * azimuth.cos(), y, ring * azimuth.sin()) * radius
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn primitive(&self) -> Primitive {
        Primitive::Points {
            points: Arc::clone(&self.points),
            size: STAR_POINT_SIZE,
            color: Color::WHITE,
        }
    }
}
