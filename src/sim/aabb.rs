//! Axis-aligned bounding boxes
//!
//! Every collision volume in the game is an `Aabb` in screen space:
//! - x grows to the right
//! - y grows downward (top edge is `y`, bottom edge is `y + height`)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    /// Create a box, panicking on a negative or non-finite size.
    ///
    /// Malformed boxes are a contract error from whoever built the level;
    /// this is checked here once so the tick path never has to.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let aabb = Self {
            x,
            y,
            width,
            height,
        };
        assert!(
            aabb.is_well_formed(),
            "malformed AABB: {x},{y} {width}x{height}"
        );
        aabb
    }

    /// Create a box from a top-left position and a size vector
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// True if all fields are finite and the size is non-negative
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// See [`overlaps`]
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self, other)
    }

    /// True if this box lies entirely inside `[0, width] x [0, height]`
    pub fn inside(&self, width: f32, height: f32) -> bool {
        self.left() >= 0.0 && self.top() >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

/// Strict overlap test.
///
/// Two boxes overlap only if the shared extent is positive on both axes.
/// Boxes that merely touch along an edge or corner do not overlap, and a
/// zero-sized box never overlaps anything.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let overlap_x = a.right().min(b.right()) - a.left().max(b.left());
    let overlap_y = a.bottom().min(b.bottom()) - a.top().max(b.top());
    overlap_x > 0.0 && overlap_y > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_interior() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge of `a`
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        // Shares the bottom edge of `a`
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        // Shares only a corner
        let corner = Aabb::new(10.0, 10.0, 5.0, 5.0);

        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
        assert!(!overlaps(&a, &corner));
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x only
        let b = Aabb::new(5.0, 20.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_identical_boxes_overlap() {
        let a = Aabb::new(3.0, 4.0, 10.0, 10.0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_zero_size_never_overlaps() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let point = Aabb::new(5.0, 5.0, 0.0, 0.0);
        let line = Aabb::new(5.0, 0.0, 0.0, 10.0);
        assert!(!overlaps(&a, &point));
        assert!(!overlaps(&point, &a));
        assert!(!overlaps(&a, &line));
    }

    #[test]
    fn test_edges_and_center() {
        let a = Aabb::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.right(), 40.0);
        assert_eq!(a.bottom(), 60.0);
        assert_eq!(a.center(), Vec2::new(25.0, 40.0));
        assert!(a.inside(40.0, 60.0));
        assert!(!a.inside(39.0, 60.0));
    }

    #[test]
    #[should_panic(expected = "malformed AABB")]
    fn test_negative_size_panics() {
        let _ = Aabb::new(0.0, 0.0, -1.0, 5.0);
    }
}
