//! The immediate-mode submission surface the scene renders through.

use crate::{Color, Primitive, Projection, Transform, Viewport};

/// Per-frame setup handed to [`RenderBackend::begin_frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSetup {
    pub viewport: Viewport,
    pub projection: Projection,
    pub clear_color: Color,
}

/// A fixed-function style rendering backend.
///
/// Calls arrive strictly in this order per frame: `begin_frame`, any number
/// of balanced `push_transform`/`pop_transform` scopes with transforms and
/// draws inside, optionally one `begin_overlay`/`end_overlay` section for the
/// HUD, then `end_frame`.
pub trait RenderBackend {
    /// Clears the target and loads the projection.
    fn begin_frame(&mut self, setup: &FrameSetup);

    /// Saves the current transform.
    fn push_transform(&mut self);

    /// Restores the most recently saved transform.
    fn pop_transform(&mut self);

    /// Post-multiplies the current transform.
    fn apply_transform(&mut self, transform: &Transform);

    /// Draws a primitive in the current frame.
    fn draw(&mut self, primitive: &Primitive);

    /// Switches to a pixel-space orthographic projection for the HUD.
    fn begin_overlay(&mut self, viewport: Viewport);

    /// Restores the 3D projection.
    fn end_overlay(&mut self);

    /// Presents the frame.
    fn end_frame(&mut self);
}
