//! Draw primitives understood by every [`RenderBackend`](crate::RenderBackend).

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::Color;

/// A vertex with its own normal and final color, laid out for direct upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl ColoredVertex {
    pub fn new(position: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }
}

/// One immediate-mode submission.
///
/// World primitives are positioned by the enclosing transform stack. Point
/// and vertex payloads are shared, so cloning a primitive never copies them.
/// `Rect` and `Text` are overlay primitives in HUD pixels with the origin at
/// the bottom-left of the viewport.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Tessellated sphere centred on the local origin.
    Sphere {
        radius: f32,
        slices: u32,
        stacks: u32,
        color: Color,
        /// `false` for self-lit bodies such as the sun.
        lit: bool,
    },
    /// Torus in the local XY plane.
    Torus {
        inner_radius: f32,
        outer_radius: f32,
        sides: u32,
        rings: u32,
        color: Color,
    },
    /// Unconnected points.
    Points {
        points: Arc<[Vec3]>,
        size: f32,
        color: Color,
    },
    /// Closed polyline.
    LineLoop { points: Arc<[Vec3]>, color: Color },
    /// Quad strip with per-vertex normals and colors. When `lit` is `false`
    /// the colors are already shaded and the backend must not light them.
    QuadStrip {
        vertices: Arc<[ColoredVertex]>,
        lit: bool,
    },
    /// Text anchored at a point in the current 3D frame.
    Label {
        text: String,
        anchor: Vec3,
        color: Color,
    },
    /// Axis-aligned overlay rectangle.
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
        filled: bool,
    },
    /// Overlay text starting at `baseline`.
    Text {
        baseline: Vec2,
        text: String,
        color: Color,
    },
}

impl Primitive {
    /// Short name of the variant, used for frame statistics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere { .. } => "sphere",
            Primitive::Torus { .. } => "torus",
            Primitive::Points { .. } => "points",
            Primitive::LineLoop { .. } => "line_loop",
            Primitive::QuadStrip { .. } => "quad_strip",
            Primitive::Label { .. } => "label",
            Primitive::Rect { .. } => "rect",
            Primitive::Text { .. } => "text",
        }
    }
}
