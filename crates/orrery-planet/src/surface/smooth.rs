use orrery_math::RandomSequence;
use orrery_render::{Color, SceneNode};

use super::{SurfaceGenerator, SurfaceSettings, sphere};

/// A single uniformly colored sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothSurface {
    pub slices: u32,
    pub stacks: u32,
}

impl SmoothSurface {
    pub fn from_settings(settings: &SurfaceSettings) -> Self {
        Self {
            slices: settings.sphere_slices,
            stacks: settings.sphere_stacks,
        }
    }
}

impl SurfaceGenerator for SmoothSurface {
    fn generate(&self, radius: f32, base: Color, _rng: &mut RandomSequence) -> SceneNode {
        SceneNode::named("surface").with_primitive(sphere(radius, self.slices, self.stacks, base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_render::Primitive;

    #[test]
    fn test_one_sphere_no_randomness() {
        let generator = SmoothSurface::from_settings(&SurfaceSettings::default());
        let mut rng = RandomSequence::new(3);
        let node = generator.generate(0.3, Color::WHITE, &mut rng);
        assert_eq!(rng, RandomSequence::new(3));
        assert_eq!(node.primitive_count(), 1);
        match &node.primitives[0] {
            Primitive::Sphere { radius, color, .. } => {
                assert_eq!(*radius, 0.3);
                assert_eq!(*color, Color::WHITE);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
