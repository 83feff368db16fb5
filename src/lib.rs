//! Heart Drop - drag the heart into the love zone, the trash can runs away
//!
//! Core modules:
//! - `sim`: Pure drag controller (hit tests, evasion, confirmation state machine)
//! - `settings`: Tuning and phrase configuration
//! - `backdrop`: Floating background heart layout
//! - `platform`: Browser bindings (DOM, pointer input, timers, confetti)

pub mod backdrop;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Pointer distance (px) from the trash centre that makes it dodge
    pub const EVADE_RADIUS: f32 = 120.0;
    /// Horizontal dodge range (px), symmetric around the current spot
    pub const EVADE_RANGE_X: f32 = 150.0;
    /// Vertical dodge range (px); negative is up, so it leans upward
    pub const EVADE_RANGE_UP: f32 = 200.0;
    pub const EVADE_RANGE_DOWN: f32 = 100.0;
    /// Largest dodge range a page config may ask for
    pub const EVADE_RANGE_MAX: f32 = 10_000.0;

    /// Delay between the shrink/fade and the actual jump (ms)
    pub const DODGE_MOVE_DELAY_MS: u32 = 100;
    /// Cooldown after the jump before another dodge may fire (ms)
    pub const DODGE_COOLDOWN_MS: u32 = 500;

    /// Heart rest position, as percentages of the card
    pub const ANCHOR_LEFT_PCT: f32 = 50.0;
    pub const ANCHOR_TOP_PCT: f32 = 30.0;

    /// Celebration burst
    pub const BURST_INTERVAL_MS: u32 = 2000;
    pub const BURST_PARTICLES: u32 = 200;
    pub const BURST_SPREAD: f32 = 100.0;
    pub const BURST_ORIGIN_Y: f32 = 0.6;

    /// Background hearts spawned at startup
    pub const BACKDROP_HEARTS: usize = 15;
}

/// Parse a CSS pixel length such as `"123.5px"`
///
/// Returns `None` for anything that is not a plain pixel value (percentages,
/// `auto`, empty strings).
pub fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
