//! Axis-aligned bounding boxes
//!
//! Every entity collides as an axis-aligned rectangle anchored at its
//! top-left corner. The overlap test uses strict inequalities: rectangles
//! that merely share an edge do not collide.

use glam::Vec2;

/// An axis-aligned rectangle; `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    /// Strict AABB overlap test. Symmetric in its arguments.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.width
            && self.pos.x + self.width > other.pos.x
            && self.pos.y < other.pos.y + other.height
            && self.pos.y + self.height > other.pos.y
    }
}
