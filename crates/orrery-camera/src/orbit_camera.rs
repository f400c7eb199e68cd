//! Orbit camera: drag rotates, wheel and keys zoom, arrows pan.
//!
//! Drag state is a two-state machine, `Idle ⇄ Dragging`. The HUD decides
//! whether a press reaches the camera at all; the controller only sees the
//! presses the HUD did not consume.

use glam::{Mat4, Vec2, Vec3};
use orrery_input::PanDirection;
use orrery_render::{Transform, compose};
use tracing::trace;

/// A complete camera placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Rotation about +Y in degrees. Unbounded.
    pub yaw: f32,
    /// Rotation about +X in degrees. Unbounded.
    pub pitch: f32,
    /// Pan offset applied before the orbit rotation.
    pub position: Vec3,
    /// Distance from the scene origin along the view axis, `>= min_distance`.
    pub distance: f32,
}

/// Tunables for [`CameraController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub default_pose: CameraPose,
    /// Closest the camera may get to the origin, `> 0`.
    pub min_distance: f32,
    /// Degrees of rotation per pixel dragged.
    pub drag_sensitivity: f32,
    /// Distance change per zoom step.
    pub zoom_step: f32,
    /// Offset change per pan step.
    pub pan_step: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            default_pose: CameraPose {
                yaw: 0.0,
                pitch: 20.0,
                position: Vec3::ZERO,
                distance: 25.0,
            },
            min_distance: 1.0,
            drag_sensitivity: 0.5,
            zoom_step: 1.0,
            pan_step: 0.5,
        }
    }
}

/// Whether a drag is in progress, and where the pointer last was.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last: Vec2 },
}

/// Owns the camera orientation, offset and zoom.
#[derive(Clone, Debug)]
pub struct CameraController {
    pose: CameraPose,
    settings: CameraSettings,
    drag: DragState,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl CameraController {
    /// Creates a controller at the default pose. A non-positive minimum
    /// distance is raised to a small positive value.
    pub fn new(mut settings: CameraSettings) -> Self {
        if settings.min_distance.is_nan() || settings.min_distance <= 0.0 {
            settings.min_distance = 0.1;
        }
        settings.default_pose.distance = settings.default_pose.distance.max(settings.min_distance);
        Self {
            pose: settings.default_pose,
            settings,
            drag: DragState::Idle,
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn yaw(&self) -> f32 {
        self.pose.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pose.pitch
    }

    pub fn distance(&self) -> f32 {
        self.pose.distance
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    // ── Drag ────────────────────────────────────────────────────────

    /// Idle → Dragging, anchored at `pointer`.
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag = DragState::Dragging { last: pointer };
    }

    /// Applies the pointer movement since the last update and returns the
    /// `(Δyaw, Δpitch)` that was added. Returns zero while idle.
    pub fn update_drag(&mut self, pointer: Vec2) -> Vec2 {
        let DragState::Dragging { last } = self.drag else {
            return Vec2::ZERO;
        };
        let delta = (pointer - last) * self.settings.drag_sensitivity;
        self.pose.yaw += delta.x;
        self.pose.pitch += delta.y;
        self.drag = DragState::Dragging { last: pointer };
        delta
    }

    /// Dragging → Idle.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    // ── Zoom / pan / reset ──────────────────────────────────────────

    /// Moves the camera `delta` units toward the origin (negative moves away),
    /// never closer than the minimum distance.
    pub fn zoom_by(&mut self, delta: f32) {
        let target = self.pose.distance - delta;
        if target < self.settings.min_distance {
            trace!(
                target,
                min = self.settings.min_distance,
                "zoom clamped at minimum distance"
            );
        }
        self.pose.distance = target.max(self.settings.min_distance);
    }

    /// One zoom step in.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.settings.zoom_step);
    }

    /// One zoom step out.
    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.settings.zoom_step);
    }

    /// Shifts the pan offset one step.
    pub fn pan(&mut self, direction: PanDirection) {
        let step = self.settings.pan_step;
        let offset = match direction {
            PanDirection::Left => Vec3::new(step, 0.0, 0.0),
            PanDirection::Right => Vec3::new(-step, 0.0, 0.0),
            PanDirection::Up => Vec3::new(0.0, -step, 0.0),
            PanDirection::Down => Vec3::new(0.0, step, 0.0),
        };
        self.pose.position += offset;
    }

    /// Restores the default pose and cancels any drag.
    pub fn reset(&mut self) {
        self.pose = self.settings.default_pose;
        self.drag = DragState::Idle;
    }

    // ── View ────────────────────────────────────────────────────────

    /// View transforms, outermost first: back off, pan, pitch, yaw.
    pub fn view_transforms(&self) -> [Transform; 4] {
        [
            Transform::Translate(Vec3::new(0.0, 0.0, -self.pose.distance)),
            Transform::Translate(self.pose.position),
            Transform::rotate_x(self.pose.pitch),
            Transform::rotate_y(self.pose.yaw),
        ]
    }

    /// View matrix equivalent of [`view_transforms`](Self::view_transforms).
    pub fn view_matrix(&self) -> Mat4 {
        compose(&self.view_transforms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_accumulates_with_sensitivity() {
        let mut cam = CameraController::default();
        cam.begin_drag(Vec2::new(100.0, 100.0));
        let d = cam.update_drag(Vec2::new(110.0, 96.0));
        assert_eq!(d, Vec2::new(5.0, -2.0));
        cam.update_drag(Vec2::new(120.0, 96.0));
        assert!((cam.yaw() - 10.0).abs() < 1e-6);
        assert!((cam.pitch() - 18.0).abs() < 1e-6);
    }

    #[test]
    fn test_update_while_idle_is_noop() {
        let mut cam = CameraController::default();
        let before = cam.pose();
        assert_eq!(cam.update_drag(Vec2::new(50.0, 50.0)), Vec2::ZERO);
        assert_eq!(cam.pose(), before);
    }

    #[test]
    fn test_drag_state_machine() {
        let mut cam = CameraController::default();
        assert_eq!(cam.drag_state(), DragState::Idle);
        cam.begin_drag(Vec2::ONE);
        assert!(cam.is_dragging());
        cam.end_drag();
        assert!(!cam.is_dragging());
        cam.update_drag(Vec2::new(1000.0, 1000.0));
        assert!((cam.yaw() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_clamps_at_minimum() {
        let mut cam = CameraController::default();
        cam.zoom_by(1000.0);
        assert_eq!(cam.distance(), 1.0);
        cam.zoom_in();
        assert_eq!(cam.distance(), 1.0);
        cam.zoom_out();
        assert_eq!(cam.distance(), 2.0);
    }

    #[test]
    fn test_non_positive_minimum_raised() {
        let cam = CameraController::new(CameraSettings {
            min_distance: 0.0,
            ..CameraSettings::default()
        });
        assert!(cam.settings().min_distance > 0.0);
    }

    #[test]
    fn test_reset_restores_default_pose() {
        let mut cam = CameraController::default();
        cam.begin_drag(Vec2::ZERO);
        cam.update_drag(Vec2::new(40.0, 40.0));
        cam.zoom_in();
        cam.pan(PanDirection::Left);
        cam.reset();
        assert_eq!(cam.pose(), CameraSettings::default().default_pose);
        assert!(!cam.is_dragging());
    }

    #[test]
    fn test_view_places_origin_in_front() {
        let cam = CameraController::default();
        let origin = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -25.0), 1e-5));
    }

    #[test]
    fn test_pan_moves_offset() {
        let mut cam = CameraController::default();
        cam.pan(PanDirection::Up);
        cam.pan(PanDirection::Up);
        assert!(cam.pose().position.abs_diff_eq(Vec3::new(0.0, -1.0, 0.0), 1e-6));
    }
}
