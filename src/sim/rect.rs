//! Axis-aligned rectangles
//!
//! Blocks live on an integer pixel grid (`Rect`); the projectile's bounding
//! square is fractional (`Bounds`). Both use the same overlap rule: interiors
//! must overlap, so rectangles that merely share an edge do not collide and
//! empty rectangles never collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Integer rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move vertically so the bottom edge sits at `bottom`
    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Interiors overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: Vec2::new(self.left() as f32, self.top() as f32),
            max: Vec2::new(self.right() as f32, self.bottom() as f32),
        }
    }
}

/// Fractional axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Square enclosing a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        self.intersects(&rect.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        assert!(a.intersects(&Rect::new(2, 2, 2, 2)));
        assert!(!a.intersects(&Rect::new(20, 0, 5, 5)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(5, 5, 0, 3)));
        assert!(!Rect::new(5, 5, 3, 0).intersects(&a));
    }

    #[test]
    fn test_set_bottom() {
        let mut r = Rect::new(4, 100, 60, 20);
        r.set_bottom(550);
        assert_eq!(r.top(), 530);
        assert_eq!(r.bottom(), 550);
        assert_eq!(r.x, 4);
    }

    #[test]
    fn test_circle_bounds() {
        let b = Bounds::around_circle(Vec2::new(150.0, 500.0), 15.0);
        assert_eq!(b.min, Vec2::new(135.0, 485.0));
        assert_eq!(b.max, Vec2::new(165.0, 515.0));
        assert!(b.intersects_rect(&Rect::new(160, 510, 40, 40)));
        assert!(!b.intersects_rect(&Rect::new(165, 480, 40, 40)));
    }
}
