//! Collision tests for axis-aligned boxes and circles
//!
//! Screen space: x grows right, y grows down, rectangles are anchored at
//! their top-left corner.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Closest point inside the rectangle to `p`
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.min(self.right()).max(self.x),
            p.y.min(self.bottom()).max(self.y),
        )
    }
}

/// Strict overlap test; touching edges do not count
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Circle vs rectangle via the closest point on the rectangle
pub fn circle_rect_intersect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.clamp_point(center);
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_intersect(&a, &b));
        assert!(rects_intersect(&b, &a));
    }

    #[test]
    fn test_rects_touching_edges_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_intersect(&a, &right));
        assert!(!rects_intersect(&a, &below));
    }

    #[test]
    fn test_zero_height_rect_never_hits() {
        // A column whose gap reaches the runway has an empty bottom rect
        let hero = Rect::new(0.0, 0.0, 40.0, 40.0);
        let empty = Rect::new(0.0, 20.0, 40.0, 0.0);
        assert!(!rects_intersect(&hero, &empty));
    }

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_rect_intersect(Vec2::new(50.0, 50.0), 5.0, &rect));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Distance to corner (10, 10) is sqrt(2) * 3 ≈ 4.24
        assert!(circle_rect_intersect(Vec2::new(13.0, 13.0), 5.0, &rect));
        assert!(!circle_rect_intersect(Vec2::new(13.0, 13.0), 4.0, &rect));
    }

    #[test]
    fn test_circle_tangent_misses() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!circle_rect_intersect(Vec2::new(15.0, 5.0), 5.0, &rect));
    }
}
