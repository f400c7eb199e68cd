//! Orrery application layer.
//!
//! Owns all mutable simulation state in one [`SimulationContext`], feeds it
//! host events, and drives clock ticks from a fixed-interval [`FrameTimer`].
//! [`window`] hosts the context in a winit window.

pub mod context;
pub mod event;
pub mod frame_timer;
pub mod settings;
pub mod window;

pub use context::SimulationContext;
pub use event::HostEvent;
pub use frame_timer::FrameTimer;
