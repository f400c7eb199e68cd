//! Rendering seam for the orrery: immediate-mode primitives, an explicit
//! transform tree built once per frame, projections, and the backend trait
//! that a real graphics API (or the in-memory recorder) implements.

mod backend;
mod camera;
mod color;
mod primitive;
mod recorder;
mod transform;

pub use backend::{FrameSetup, RenderBackend};
pub use camera::{Projection, Viewport};
pub use color::Color;
pub use primitive::{ColoredVertex, Primitive};
pub use recorder::{DrawCommand, RecordedDraw, RecordingBackend};
pub use transform::{SceneNode, Transform, compose};
