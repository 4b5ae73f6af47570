//! Axis-aligned boxes and playfield containment
//!
//! The playfield is the rectangle [0, W] x [0, H] with the origin at the
//! top-left. Containment is judged per axis so callers can react to
//! horizontal and vertical exits independently.

use glam::Vec2;

/// An axis-aligned box identified by its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Translate the box in place.
    #[inline]
    pub fn shift(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Strict-overlap intersection test. Boxes that merely share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Per-axis playfield containment: `(within_x, within_y)`.
///
/// An axis flag is true iff the box lies entirely within that axis's span of
/// the field. Edge contact still counts as inside.
pub fn check_bounds(rect: &Rect, field: Vec2) -> (bool, bool) {
    let within_x = rect.left() >= 0.0 && rect.right() <= field.x;
    let within_y = rect.top() >= 0.0 && rect.bottom() <= field.y;
    (within_x, within_y)
}
