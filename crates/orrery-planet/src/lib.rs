//! Celestial bodies and their procedurally generated surfaces.

mod body;
mod catalog;
pub mod surface;

pub use body::{CelestialBody, Moon, Star, SurfaceKind};
pub use catalog::{SolarSystem, solar_system};
pub use surface::{
    BandedSurface, CrateredSurface, EarthLikeSurface, SmoothSurface, SurfaceGenerator,
    SurfaceSettings, generate_surface,
};
