//! Local transforms and the per-frame transform tree.
//!
//! A [`SceneNode`] owns an ordered list of transforms, the primitives drawn in
//! the resulting frame, and child nodes that inherit that frame. Submission
//! wraps every node in exactly one push/pop pair, so nesting can never be
//! unbalanced no matter how the tree is assembled.

use glam::{Mat4, Vec3};

use crate::{Primitive, RenderBackend};

/// A single local transform, applied right-to-left like a fixed-function
/// matrix stack (the first transform in a list is outermost).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Rotation by `degrees` about `axis`.
    Rotate { degrees: f32, axis: Vec3 },
    Translate(Vec3),
    Scale(Vec3),
}

impl Transform {
    /// Rotation about +Y, the orbital-plane normal.
    pub fn rotate_y(degrees: f32) -> Self {
        Self::Rotate {
            degrees,
            axis: Vec3::Y,
        }
    }

    /// Rotation about +X.
    pub fn rotate_x(degrees: f32) -> Self {
        Self::Rotate {
            degrees,
            axis: Vec3::X,
        }
    }

    /// Rotation about +Z, the orbital plane's horizontal tilt axis.
    pub fn rotate_z(degrees: f32) -> Self {
        Self::Rotate {
            degrees,
            axis: Vec3::Z,
        }
    }

    /// Matrix form. A zero rotation axis degrades to the identity.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Transform::Rotate { degrees, axis } => match axis.try_normalize() {
                Some(axis) => Mat4::from_axis_angle(axis, degrees.to_radians()),
                None => Mat4::IDENTITY,
            },
            Transform::Translate(offset) => Mat4::from_translation(offset),
            Transform::Scale(factors) => Mat4::from_scale(factors),
        }
    }
}

/// Composes a transform list in application order.
#[must_use]
pub fn compose(transforms: &[Transform]) -> Mat4 {
    transforms
        .iter()
        .fold(Mat4::IDENTITY, |acc, t| acc * t.matrix())
}

/// A node of the per-frame transform tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneNode {
    /// Optional name for lookups in tests and diagnostics.
    pub name: Option<String>,
    pub transforms: Vec<Transform>,
    pub primitives: Vec<Primitive>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an empty, unnamed node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty node with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    #[must_use]
    pub fn with_transforms(mut self, transforms: impl IntoIterator<Item = Transform>) -> Self {
        self.transforms.extend(transforms);
        self
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Product of this node's own transforms.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        compose(&self.transforms)
    }

    /// Calls `f` with the world matrix of every primitive in the subtree,
    /// depth-first in submission order.
    pub fn visit(&self, parent: Mat4, f: &mut impl FnMut(Mat4, &Primitive)) {
        let world = parent * self.local_matrix();
        for primitive in &self.primitives {
            f(world, primitive);
        }
        for child in &self.children {
            child.visit(world, f);
        }
    }

    /// World matrix of the first node named `name`, searching depth-first.
    #[must_use]
    pub fn world_matrix_of(&self, name: &str) -> Option<Mat4> {
        self.find_with_parent(name, Mat4::IDENTITY)
    }

    fn find_with_parent(&self, name: &str, parent: Mat4) -> Option<Mat4> {
        let world = parent * self.local_matrix();
        if self.name.as_deref() == Some(name) {
            return Some(world);
        }
        self.children
            .iter()
            .find_map(|child| child.find_with_parent(name, world))
    }

    /// First node named `name`, searching depth-first.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Total primitives in the subtree.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
            + self
                .children
                .iter()
                .map(SceneNode::primitive_count)
                .sum::<usize>()
    }

    /// Nesting depth of the subtree (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(SceneNode::depth).max().unwrap_or(0)
    }

    /// Submits the subtree to `backend`, one push/pop pair per node.
    pub fn submit<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        backend.push_transform();
        for transform in &self.transforms {
            backend.apply_transform(transform);
        }
        for primitive in &self.primitives {
            backend.draw(primitive);
        }
        for child in &self.children {
            child.submit(backend);
        }
        backend.pop_transform();
    }
}
