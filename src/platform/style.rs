//! CSS values written by the page
//!
//! Kept free of `web_sys` so the formatting is testable natively.

use glam::Vec2;

use crate::consts::{ANCHOR_LEFT_PCT, ANCHOR_TOP_PCT};
use crate::sim::{FeedbackAnim, HeartPlacement};

/// Springy return used whenever the heart is not being dragged
pub const HEART_SPRING_TRANSITION: &str = "all 0.5s cubic-bezier(0.175, 0.885, 0.32, 1.275)";
pub const HEART_CENTERING: &str = "translate(-50%, -50%)";

pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_GRABBING: &str = "grabbing";

/// Quick shrink before the trash can jumps
pub const TRASH_DODGE_TRANSITION: &str = "transform 0.1s ease-in, opacity 0.1s ease-in";
/// Bouncy landing after the jump
pub const TRASH_LAND_TRANSITION: &str =
    "transform 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275), opacity 0.3s ease-out";
pub const TRASH_DODGE_SCALE: f32 = 0.5;
pub const TRASH_DODGE_OPACITY: &str = "0.3";

/// left/top/transform for the heart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartCss {
    pub left: String,
    pub top: String,
    /// Only written when returning to the anchor
    pub transform: Option<&'static str>,
}

pub fn heart_css(placement: HeartPlacement) -> HeartCss {
    match placement {
        HeartPlacement::Anchored => HeartCss {
            left: format!("{}%", ANCHOR_LEFT_PCT),
            top: format!("{}%", ANCHOR_TOP_PCT),
            transform: Some(HEART_CENTERING),
        },
        HeartPlacement::At(pos) => HeartCss {
            left: format!("{}px", pos.x),
            top: format!("{}px", pos.y),
            transform: None,
        },
    }
}

/// Transform placing the trash can at `offset` from its layout spot
pub fn trash_transform(offset: Vec2, scale: f32) -> String {
    format!("translate({}px, {}px) scale({})", offset.x, offset.y, scale)
}

pub fn feedback_animation(anim: FeedbackAnim) -> &'static str {
    match anim {
        FeedbackAnim::Shake => "shake 0.5s",
        FeedbackAnim::Pulse => "pulse 0.5s",
    }
}
