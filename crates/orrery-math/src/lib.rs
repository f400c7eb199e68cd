//! Deterministic numeric building blocks for the orrery: a linear-congruential
//! random stream and an integer midpoint-circle rasterizer for orbit guides.

mod orbit_path;
mod random;

pub use orbit_path::{DEFAULT_ORBIT_SCALE, OrbitPathRasterizer, midpoint_circle};
pub use random::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER, RandomSequence};
