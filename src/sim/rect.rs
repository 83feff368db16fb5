//! Axis-aligned screen rectangles
//!
//! Mirrors a `DOMRect` from `getBoundingClientRect`: client coordinates with y
//! growing downward.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rect of the given size centred on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Same rect moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.left + delta.x, self.top + delta.y, self.width, self.height)
    }

    /// Closed containment: points on the edge count as inside
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn test_contains_is_closed() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(5.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.01, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, -0.01)));
    }

    #[test]
    fn test_from_center_round_trips_center() {
        let r = Rect::from_center(Vec2::new(300.0, 400.0), 80.0, 60.0);
        assert_eq!(r.center(), Vec2::new(300.0, 400.0));
        assert_eq!(r.left, 260.0);
        assert_eq!(r.top, 370.0);
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).translated(Vec2::new(5.0, -3.0));
        assert_eq!(r, Rect::new(5.0, -3.0, 10.0, 10.0));
    }
}
