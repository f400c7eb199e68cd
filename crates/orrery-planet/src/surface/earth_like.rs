//! Earth-style surface: an ocean sphere with fixed continent patches.

use orrery_math::RandomSequence;
use orrery_render::{Color, SceneNode};

use super::{SurfaceGenerator, SurfaceSettings, sphere, surface_patch};

const LAND: Color = Color::new(0.2, 0.6, 0.25);
const ICE: Color = Color::new(0.95, 0.95, 0.97);

/// A named landmass placed at a fixed latitude/longitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Continent {
    pub name: &'static str,
    pub latitude: f32,
    pub longitude: f32,
    /// Patch radius as a fraction of the body radius.
    pub size: f32,
    pub color: Color,
}

/// Continent table, drawn in this order.
pub const CONTINENTS: &[Continent] = &[
    Continent {
        name: "North America",
        latitude: 45.0,
        longitude: -100.0,
        size: 0.45,
        color: LAND,
    },
    Continent {
        name: "South America",
        latitude: -15.0,
        longitude: -60.0,
        size: 0.35,
        color: LAND,
    },
    Continent {
        name: "Europe",
        latitude: 50.0,
        longitude: 15.0,
        size: 0.25,
        color: LAND,
    },
    Continent {
        name: "Africa",
        latitude: 5.0,
        longitude: 20.0,
        size: 0.4,
        color: LAND,
    },
    Continent {
        name: "Asia",
        latitude: 45.0,
        longitude: 90.0,
        size: 0.5,
        color: LAND,
    },
    Continent {
        name: "Australia",
        latitude: -25.0,
        longitude: 135.0,
        size: 0.25,
        color: LAND,
    },
    Continent {
        name: "Arctic",
        latitude: 90.0,
        longitude: 0.0,
        size: 0.3,
        color: ICE,
    },
    Continent {
        name: "Antarctica",
        latitude: -90.0,
        longitude: 0.0,
        size: 0.35,
        color: ICE,
    },
];

/// Ocean in the body's base color with deterministic continents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EarthLikeSurface {
    pub slices: u32,
    pub stacks: u32,
}

impl EarthLikeSurface {
    pub fn from_settings(settings: &SurfaceSettings) -> Self {
        Self {
            slices: settings.sphere_slices,
            stacks: settings.sphere_stacks,
        }
    }
}

impl SurfaceGenerator for EarthLikeSurface {
    fn generate(&self, radius: f32, base: Color, _rng: &mut RandomSequence) -> SceneNode {
        let tess = ((self.slices / 2).max(4), (self.stacks / 2).max(4));
        let mut node = SceneNode::named("surface")
            .with_primitive(sphere(radius, self.slices, self.stacks, base));
        for continent in CONTINENTS {
            let mut patch = surface_patch(
                continent.longitude,
                90.0 - continent.latitude,
                radius,
                radius * continent.size,
                continent.color,
                tess,
            );
            patch.name = Some(continent.name.to_string());
            node.push_child(patch);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_every_continent_emitted() {
        let generator = EarthLikeSurface::from_settings(&SurfaceSettings::default());
        let node = generator.generate(0.3, Color::new(0.2, 0.5, 1.0), &mut RandomSequence::new(0));
        assert_eq!(node.children.len(), CONTINENTS.len());
        for c in CONTINENTS {
            assert!(node.find(c.name).is_some(), "{} missing", c.name);
        }
    }

    #[test]
    fn test_positions_are_deterministic() {
        let generator = EarthLikeSurface::from_settings(&SurfaceSettings::default());
        let a = generator.generate(0.3, Color::WHITE, &mut RandomSequence::new(1));
        let b = generator.generate(0.3, Color::WHITE, &mut RandomSequence::new(999));
        assert_eq!(a, b);
    }

    #[test]
    fn test_arctic_sits_on_north_pole() {
        let generator = EarthLikeSurface::from_settings(&SurfaceSettings::default());
        let node = generator.generate(1.0, Color::WHITE, &mut RandomSequence::new(0));
        let m = node.world_matrix_of("Arctic").unwrap();
        let centre = m.transform_point3(Vec3::ZERO);
        assert!(centre.abs_diff_eq(Vec3::Y, 1e-5), "{centre:?}");
    }

    #[test]
    fn test_southern_continents_below_equator() {
        let generator = EarthLikeSurface::from_settings(&SurfaceSettings::default());
        let node = generator.generate(1.0, Color::WHITE, &mut RandomSequence::new(0));
        for name in ["South America", "Australia", "Antarctica"] {
            let y = node
                .world_matrix_of(name)
                .unwrap()
                .transform_point3(Vec3::ZERO)
                .y;
            assert!(y < 0.0, "{name} at y={y}");
        }
    }
}
