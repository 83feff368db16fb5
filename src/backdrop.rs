//! Floating background hearts
//!
//! Purely decorative. Layout is generated here; the page turns each entry into
//! a `.bg-heart` element whose CSS animation does the floating.

use rand::Rng;

/// Glyphs picked at random for each heart
pub const GLYPHS: [&str; 2] = ["❤️", "💖"];

/// One decorative heart
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub glyph: &'static str,
    /// Horizontal position, percent of the container width
    pub left_pct: f32,
    /// Float animation duration (seconds)
    pub duration_s: f32,
    /// Animation start delay (seconds)
    pub delay_s: f32,
}

/// Lay out `count` hearts: left in [0, 100), 10-20 s duration, 0-5 s delay
pub fn layout_hearts<R: Rng>(rng: &mut R, count: usize) -> Vec<FloatingHeart> {
    (0..count)
        .map(|_| FloatingHeart {
            glyph: if rng.random_bool(0.5) {
                GLYPHS[0]
            } else {
                GLYPHS[1]
            },
            left_pct: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(10.0..20.0),
            delay_s: rng.random_range(0.0..5.0),
        })
        .collect()
}
