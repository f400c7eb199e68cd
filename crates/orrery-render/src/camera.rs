//! Viewport and projection parameters.

use glam::Mat4;

/// Drawable area in pixels. Both dimensions are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a viewport, clamping zero dimensions to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width / height. Never divides by zero.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

/// Projection type for a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection for the 3D scene.
    Perspective {
        /// Vertical field of view in degrees.
        fov_y_deg: f32,
        /// Width / height.
        aspect_ratio: f32,
        near: f32,
        far: f32,
    },
    /// Pixel-space orthographic projection for the HUD, origin bottom-left.
    Orthographic { width: f32, height: f32 },
}

impl Projection {
    /// Perspective projection sized to `viewport`.
    pub fn perspective(fov_y_deg: f32, viewport: Viewport, near: f32, far: f32) -> Self {
        Projection::Perspective {
            fov_y_deg,
            aspect_ratio: viewport.aspect_ratio(),
            near,
            far,
        }
    }

    /// Overlay projection covering `viewport` one unit per pixel.
    pub fn overlay(viewport: Viewport) -> Self {
        Projection::Orthographic {
            width: viewport.width() as f32,
            height: viewport.height() as f32,
        }
    }

    /// Update the aspect ratio for perspective projection.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        match self {
            Projection::Perspective { aspect_ratio, .. } => {
                *aspect_ratio = viewport.aspect_ratio();
            }
            Projection::Orthographic { width, height } => {
                *width = viewport.width() as f32;
                *height = viewport.height() as f32;
            }
        }
    }

    /// OpenGL-convention projection matrix (depth in `[-1, 1]`).
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective {
                fov_y_deg,
                aspect_ratio,
                near,
                far,
            } => Mat4::perspective_rh_gl(fov_y_deg.to_radians(), aspect_ratio, near, far),
            Projection::Orthographic { width, height } => {
                Mat4::orthographic_rh_gl(0.0, width, 0.0, height, -1.0, 1.0)
            }
        }
    }
}
