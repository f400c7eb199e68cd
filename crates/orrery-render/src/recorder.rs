//! In-memory backend that records every call.
//!
//! Used by the headless driver and by tests: it keeps the raw command stream
//! plus the resolved world matrix of each draw, and tracks stack balance.

use glam::{Mat4, Vec3};

use crate::{FrameSetup, Primitive, RenderBackend, Transform, Viewport};

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    BeginFrame(FrameSetup),
    PushTransform,
    PopTransform,
    ApplyTransform(Transform),
    Draw(Primitive),
    BeginOverlay(Viewport),
    EndOverlay,
    EndFrame,
}

/// A draw call with the transform it was issued under.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDraw {
    pub world: Mat4,
    pub primitive: Primitive,
    /// Whether the draw happened inside the HUD overlay section.
    pub overlay: bool,
}

impl RecordedDraw {
    /// Position of the local origin in world space.
    pub fn origin(&self) -> Vec3 {
        self.world.transform_point3(Vec3::ZERO)
    }
}

/// Records backend calls in memory.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<DrawCommand>,
    draws: Vec<RecordedDraw>,
    current: Mat4,
    stack: Vec<Mat4>,
    max_depth: usize,
    unbalanced_pops: usize,
    in_overlay: bool,
    frames: u64,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            ..Self::default()
        }
    }

    /// Drops recorded commands and draws, keeping the frame counter.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.draws.clear();
        self.stack.clear();
        self.current = Mat4::IDENTITY;
        self.max_depth = 0;
        self.unbalanced_pops = 0;
        self.in_overlay = false;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Draws of a given [`Primitive::kind`].
    pub fn draws_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a RecordedDraw> {
        self.draws.iter().filter(move |d| d.primitive.kind() == kind)
    }

    /// Deepest transform nesting seen since the last clear.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether every push has been popped and no pop underflowed.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.unbalanced_pops == 0
    }

    /// Number of completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for RecordingBackend {
    fn begin_frame(&mut self, setup: &FrameSetup) {
        self.current = Mat4::IDENTITY;
        self.commands.push(DrawCommand::BeginFrame(setup.clone()));
    }

    fn push_transform(&mut self) {
        self.stack.push(self.current);
        self.max_depth = self.max_depth.max(self.stack.len());
        self.commands.push(DrawCommand::PushTransform);
    }

    fn pop_transform(&mut self) {
        match self.stack.pop() {
            Some(saved) => self.current = saved,
            None => {
                log::warn!("pop_transform with an empty stack");
                self.unbalanced_pops += 1;
            }
        }
        self.commands.push(DrawCommand::PopTransform);
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.current *= transform.matrix();
        self.commands.push(DrawCommand::ApplyTransform(*transform));
    }

    fn draw(&mut self, primitive: &Primitive) {
        self.draws.push(RecordedDraw {
            world: self.current,
            primitive: primitive.clone(),
            overlay: self.in_overlay,
        });
        self.commands.push(DrawCommand::Draw(primitive.clone()));
    }

    fn begin_overlay(&mut self, viewport: Viewport) {
        self.in_overlay = true;
        self.stack.push(self.current);
        self.current = Mat4::IDENTITY;
        self.commands.push(DrawCommand::BeginOverlay(viewport));
    }

    fn end_overlay(&mut self) {
        self.in_overlay = false;
        if let Some(saved) = self.stack.pop() {
            self.current = saved;
        }
        self.commands.push(DrawCommand::EndOverlay);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        self.commands.push(DrawCommand::EndFrame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Projection};
    use glam::Vec2;

    #[test]
    fn test_pop_restores_matrix() {
        let mut b = RecordingBackend::new();
        b.push_transform();
        b.apply_transform(&Transform::Translate(Vec3::X));
        b.pop_transform();
        b.draw(&Primitive::Points {
            points: vec![Vec3::ZERO].into(),
            size: 1.0,
            color: Color::WHITE,
        });
        assert_eq!(b.draws()[0].origin(), Vec3::ZERO);
        assert!(b.is_balanced());
    }

    #[test]
    fn test_underflow_is_counted() {
        let mut b = RecordingBackend::new();
        b.pop_transform();
        assert!(!b.is_balanced());
    }

    #[test]
    fn test_overlay_draws_are_flagged() {
        let mut b = RecordingBackend::new();
        let vp = Viewport::new(100, 100);
        b.begin_frame(&FrameSetup {
            viewport: vp,
            projection: Projection::overlay(vp),
            clear_color: Color::BLACK,
        });
        b.begin_overlay(vp);
        b.draw(&Primitive::Text {
            baseline: Vec2::new(5.0, 5.0),
            text: "hi".into(),
            color: Color::WHITE,
        });
        b.end_overlay();
        b.end_frame();
        assert!(b.draws()[0].overlay);
        assert_eq!(b.draws_of_kind("text").count(), 1);
        assert_eq!(b.frames(), 1);
        assert!(b.is_balanced());
    }
}
