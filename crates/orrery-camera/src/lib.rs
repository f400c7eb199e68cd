//! Drag-to-orbit camera control for the orrery view.

pub mod orbit_camera;

pub use orbit_camera::{CameraController, CameraPose, CameraSettings, DragState};
