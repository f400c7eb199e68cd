//! CPU-side diffuse lighting for procedurally shaded surfaces.

mod directional;

pub use directional::{DEFAULT_AMBIENT_FLOOR, SunLight};
