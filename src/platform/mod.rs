//! Browser platform layer
//!
//! Handles everything the pure `sim` controller cannot:
//! - Element lookup and style writes
//! - Mouse/touch event decoding
//! - The confetti library binding
//!
//! Only `style` builds natively; the rest needs `web_sys`.

pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod confetti;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod input;

/// Whether a `pagehide` should cancel the recurring burst
///
/// A persisted page went into the back/forward cache and may be shown again,
/// so its timers stay alive.
pub fn stops_celebration(persisted: bool) -> bool {
    !persisted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_page_keeps_celebration() {
        assert!(!stops_celebration(true));
        assert!(stops_celebration(false));
    }
}
