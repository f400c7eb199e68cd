//! Per-frame scene assembly: the animation clock, the transform composer that
//! places every body, the background starfield, and the orchestrator that
//! turns all of it into one transform tree for the render backend.

pub mod clock;
pub mod composer;
pub mod orchestrator;
pub mod starfield;

pub use clock::{AnimationClock, ClockSettings};
pub use composer::{BodyTransforms, TransformComposer, wrap_degrees};
pub use orchestrator::{SceneOptions, SceneOrchestrator};
pub use starfield::Starfield;
