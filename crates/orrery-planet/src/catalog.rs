//! The built-in solar system table, loaded once at startup.

use orrery_render::Color;

use crate::{CelestialBody, Moon, Star, SurfaceKind};

/// The star and its planets, in render order.
#[derive(Clone, Debug, PartialEq)]
pub struct SolarSystem {
    pub star: Star,
    pub planets: Vec<CelestialBody>,
}

impl SolarSystem {
    /// Planet by display name.
    pub fn planet(&self, name: &str) -> Option<&CelestialBody> {
        self.planets.iter().find(|p| p.name == name)
    }
}

/// Builds the default eight-planet system.
pub fn solar_system() -> SolarSystem {
    let grey = Color::new(0.7, 0.7, 0.7);

    let planets = vec![
        CelestialBody::new("Mercury", 2.0, 0.2, Color::new(0.8, 0.6, 0.4))
            .with_speeds(4.0, 2.0)
            .with_tilt(0.03)
            .with_surface(SurfaceKind::Cratered),
        CelestialBody::new("Venus", 3.0, 0.3, Color::new(1.0, 0.8, 0.4))
            .with_speeds(2.5, -1.5)
            .with_tilt(2.6),
        CelestialBody::new("Earth", 4.5, 0.3, Color::new(0.2, 0.5, 1.0))
            .with_speeds(1.8, 1.0)
            .with_tilt(23.4)
            .with_surface(SurfaceKind::EarthLike)
            .with_moon(Moon {
                distance: 0.6,
                size: 0.08,
                orbit_speed: 6.0,
                color: grey,
            }),
        CelestialBody::new("Mars", 5.5, 0.25, Color::new(1.0, 0.4, 0.2))
            .with_speeds(1.2, 0.8)
            .with_tilt(25.2)
            .with_surface(SurfaceKind::Cratered),
        CelestialBody::new("Jupiter", 8.0, 0.8, Color::new(1.0, 0.7, 0.3))
            .with_speeds(0.6, 0.5)
            .with_tilt(3.1)
            .with_surface(SurfaceKind::Banded)
            .with_moon(Moon {
                distance: 1.2,
                size: 0.1,
                orbit_speed: 5.0,
                color: Color::new(0.9, 0.8, 0.3),
            })
            .with_moon(Moon {
                distance: 1.5,
                size: 0.09,
                orbit_speed: 3.5,
                color: Color::new(0.8, 0.75, 0.7),
            }),
        CelestialBody::new("Saturn", 10.0, 0.7, Color::new(0.9, 0.8, 0.5))
            .with_speeds(0.4, 0.4)
            .with_tilt(26.7)
            .with_surface(SurfaceKind::Banded)
            .with_rings()
            .with_moon(Moon {
                distance: 1.3,
                size: 0.12,
                orbit_speed: 2.5,
                color: Color::new(0.9, 0.6, 0.3),
            }),
        CelestialBody::new("Uranus", 12.0, 0.5, Color::new(0.4, 0.8, 1.0))
            .with_speeds(0.3, -0.3)
            .with_tilt(97.8)
            .with_rings(),
        CelestialBody::new("Neptune", 14.0, 0.5, Color::new(0.2, 0.4, 1.0))
            .with_speeds(0.2, 0.2)
            .with_tilt(28.3)
            .with_moon(Moon {
                distance: 0.9,
                size: 0.1,
                orbit_speed: -3.0,
                color: grey,
            }),
    ];

    SolarSystem {
        star: Star {
            name: "Sun".to_string(),
            size: 1.0,
            color: Color::YELLOW,
        },
        planets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_planets_in_order() {
        let system = solar_system();
        let names: Vec<&str> = system.planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"
            ]
        );
    }

    #[test]
    fn test_bodies_have_positive_geometry() {
        for p in solar_system().planets {
            assert!(p.distance > 0.0, "{} distance", p.name);
            assert!(p.size > 0.0, "{} size", p.name);
            for m in &p.moons {
                assert!(m.distance > p.size, "{} moon inside planet", p.name);
                assert!(m.size > 0.0);
            }
        }
    }

    #[test]
    fn test_earth_matches_reference_orbit() {
        let system = solar_system();
        let earth = system.planet("Earth").unwrap();
        assert_eq!(earth.distance, 4.5);
        assert_eq!(earth.orbit_speed, 1.8);
        assert_eq!(earth.surface, SurfaceKind::EarthLike);
        assert_eq!(earth.moons.len(), 1);
    }

    #[test]
    fn test_retrograde_bodies() {
        let system = solar_system();
        assert!(system.planet("Venus").unwrap().rotation_speed < 0.0);
        assert!(system.planet("Neptune").unwrap().moons[0].orbit_speed < 0.0);
    }

    #[test]
    fn test_ringed_planets() {
        let ringed: Vec<String> = solar_system()
            .planets
            .into_iter()
            .filter(|p| p.has_rings)
            .map(|p| p.name)
            .collect();
        assert_eq!(ringed, ["Saturn", "Uranus"]);
    }
}
