//! Controller state types
//!
//! Everything here is ephemeral: created at page load, gone on unload.

use glam::Vec2;

/// Which physical pointer a sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    Mouse,
    /// Touch contact, keyed by `Touch.identifier`
    Touch(i32),
}

/// A pointer position in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub pos: Vec2,
}

impl PointerSample {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            id: PointerId::Mouse,
            pos: Vec2::new(x, y),
        }
    }

    pub fn touch(identifier: i32, x: f32, y: f32) -> Self {
        Self {
            id: PointerId::Touch(identifier),
            pos: Vec2::new(x, y),
        }
    }
}

/// An in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    /// The contact being followed; everything else is ignored
    pub pointer: PointerId,
    /// Pointer position at drag start
    pub start: Vec2,
    /// Heart left/top (px) at drag start
    pub origin: Vec2,
}

impl PointerSession {
    /// Heart left/top for a pointer at `pos`
    #[inline]
    pub fn position_for(&self, pos: Vec2) -> Vec2 {
        self.origin + (pos - self.start)
    }
}

/// Where the heart sits inside its card
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HeartPlacement {
    /// Resting at the anchor (50% / 30%, centred on itself)
    #[default]
    Anchored,
    /// Explicit left/top in px while being dragged
    At(Vec2),
}

/// Confirmation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for love drops; `confirmations` already given
    Idle { confirmations: usize },
    /// Every confirmation given; celebration running
    Won,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Idle { confirmations: 0 }
    }
}

/// A dodge that has shrunk the trash can but not yet moved it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDodge {
    pub offset: Vec2,
    /// Show a trash phrase when the move lands
    pub announce: bool,
}

/// Trash can dodge bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvasionState {
    /// Current displacement from the trash can's layout position
    pub offset: Vec2,
    /// Set while a dodge is in flight; blocks proximity re-triggers
    pub cooling: bool,
    /// Latest dodge, waiting for its move timer
    pub pending: Option<PendingDodge>,
    /// Bumped per dodge; timers carrying an older value are stale
    pub seq: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_position_follows_displacement() {
        let session = PointerSession {
            pointer: PointerId::Mouse,
            start: Vec2::new(100.0, 100.0),
            origin: Vec2::new(200.0, 150.0),
        };
        assert_eq!(session.position_for(Vec2::new(100.0, 100.0)), Vec2::new(200.0, 150.0));
        assert_eq!(session.position_for(Vec2::new(130.0, 90.0)), Vec2::new(230.0, 140.0));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Phase::default(), Phase::Idle { confirmations: 0 });
        assert_eq!(HeartPlacement::default(), HeartPlacement::Anchored);
        let evasion = EvasionState::default();
        assert!(!evasion.cooling);
        assert_eq!(evasion.offset, Vec2::ZERO);
    }
}
