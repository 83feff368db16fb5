//! Drop classification and proximity checks
//!
//! Both work on rendered boxes measured at call time, so a trash can that
//! already dodged is tested where it is now, not where it started.

use glam::Vec2;

use super::rect::Rect;

/// Where a released heart landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    Love,
    Trash,
    Miss,
}

/// Rendered boxes needed to classify a drop
#[derive(Debug, Clone, Copy)]
pub struct DropGeometry {
    /// The dragged heart
    pub heart: Rect,
    pub love: Rect,
    pub trash: Rect,
}

/// Classify a drop by the heart's centre
///
/// Love wins if the boxes ever overlap.
pub fn classify_drop(geometry: &DropGeometry) -> DropZone {
    let center = geometry.heart.center();
    if geometry.love.contains(center) {
        DropZone::Love
    } else if geometry.trash.contains(center) {
        DropZone::Trash
    } else {
        DropZone::Miss
    }
}

/// Check if the pointer is close enough to the target centre to spook it
///
/// Strictly closer than `radius`; exactly on the boundary does not count.
pub fn within_evade_radius(pointer: Vec2, target: &Rect, radius: f32) -> bool {
    pointer.distance(target.center()) < radius
}
