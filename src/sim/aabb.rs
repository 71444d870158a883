//! Axis-aligned bounding boxes for birds and pipe pieces
//!
//! Boxes are half-open: a box covers `[min.x, max.x) x [min.y, max.y)`, so two
//! boxes that only share an edge do not overlap.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test (touching edges don't count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::splat(size))
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = square(0.0, 0.0, 10.0);
        assert!(!a.intersects(&square(10.0, 0.0, 10.0)));
        assert!(!a.intersects(&square(0.0, 10.0, 10.0)));
        assert!(!a.intersects(&square(10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_one_unit_overlap_intersects() {
        let a = square(0.0, 0.0, 10.0);
        assert!(a.intersects(&square(9.0, 0.0, 10.0)));
        assert!(a.intersects(&square(0.0, 9.0, 10.0)));
        assert!(square(9.0, 9.0, 10.0).intersects(&a));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = square(0.0, 0.0, 100.0);
        let inner = square(40.0, 40.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
