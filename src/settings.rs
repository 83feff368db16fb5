//! Game tuning and phrases
//!
//! Defaults are compiled in. The page may override any field by embedding a
//! `<script id="game-config" type="application/json">` element.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Parameters handed to the confetti library for one burst
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BurstParams {
    pub particle_count: u32,
    /// Spread angle in degrees
    pub spread: f32,
    pub origin: BurstOrigin,
}

/// Burst origin as fractions of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstOrigin {
    pub x: f32,
    pub y: f32,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            particle_count: BURST_PARTICLES,
            spread: BURST_SPREAD,
            origin: BurstOrigin {
                x: 0.5,
                y: BURST_ORIGIN_Y,
            },
        }
    }
}

/// Everything tweakable about a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Evasion ===
    /// Pointer distance from the trash centre that triggers a dodge
    pub evade_radius: f32,
    /// Max horizontal jump in either direction
    pub evade_range_x: f32,
    /// Max upward jump
    pub evade_range_up: f32,
    /// Max downward jump
    pub evade_range_down: f32,
    pub dodge_move_delay_ms: u32,
    pub dodge_cooldown_ms: u32,

    // === Celebration ===
    pub burst: BurstParams,
    pub burst_interval_ms: u32,

    // === Text ===
    /// One per required confirmation; the count sets how many love drops it takes
    pub confirm_phrases: Vec<String>,
    /// Shown when the trash can dodges
    pub trash_phrases: Vec<String>,
    /// Shown when the heart actually lands in the trash
    pub trash_drop_message: String,
    pub success_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            evade_radius: EVADE_RADIUS,
            evade_range_x: EVADE_RANGE_X,
            evade_range_up: EVADE_RANGE_UP,
            evade_range_down: EVADE_RANGE_DOWN,
            dodge_move_delay_ms: DODGE_MOVE_DELAY_MS,
            dodge_cooldown_ms: DODGE_COOLDOWN_MS,

            burst: BurstParams::default(),
            burst_interval_ms: BURST_INTERVAL_MS,

            confirm_phrases: to_strings(&[
                "Are you sure? 🥺",
                "Really really sure? 🧐",
                "Lock your answer? 🔒",
                "Final answer? 📝",
                "Promise you won't regret it? 💍",
                "Okay, one last check... ✅",
            ]),
            trash_phrases: to_strings(&[
                "I'm not trash! 🗑️",
                "How dare you! 😤",
                "Try the other one! 👉",
                "Nope, not here! 🚫",
                "Don't even think about it! 🤨",
                "I will run away! 🏃‍♂️",
                "Am I a joke to you? 🤡",
                "Wrong choice! ❌",
                "Heart goes in Heart! ❤️",
                "Stay away! 😱",
            ]),
            trash_drop_message: "Hey! I said NO! 😡".to_string(),
            success_message: "YAY! I LOVE YOU! ❤️".to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Non-negative, finite and at most `EVADE_RANGE_MAX`; NaN falls back to `default`
fn sane_range(range: f32, default: f32) -> f32 {
    if range.is_nan() {
        log::warn!("Invalid evade range {}, using default", range);
        return default;
    }
    let range = range.abs();
    if range > EVADE_RANGE_MAX {
        log::warn!("Evade range {} too large, clamping to {}", range, EVADE_RANGE_MAX);
        return EVADE_RANGE_MAX;
    }
    range
}

impl GameConfig {
    /// DOM id of the optional JSON override element
    pub const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Number of confirmations required before the win
    pub fn confirmations_required(&self) -> usize {
        self.confirm_phrases.len()
    }

    /// Parse a JSON overlay; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace values the controller cannot work with by their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.confirm_phrases.is_empty() {
            log::warn!("Config has no confirmation phrases, using defaults");
            self.confirm_phrases = defaults.confirm_phrases;
        }
        if self.trash_phrases.is_empty() {
            log::warn!("Config has no trash phrases, using defaults");
            self.trash_phrases = defaults.trash_phrases;
        }
        if !(self.evade_radius > 0.0 && self.evade_radius.is_finite()) {
            log::warn!("Invalid evade radius {}, using default", self.evade_radius);
            self.evade_radius = defaults.evade_radius;
        }
        self.evade_range_x = sane_range(self.evade_range_x, defaults.evade_range_x);
        self.evade_range_up = sane_range(self.evade_range_up, defaults.evade_range_up);
        self.evade_range_down = sane_range(self.evade_range_down, defaults.evade_range_down);
        if self.burst_interval_ms == 0 {
            self.burst_interval_ms = defaults.burst_interval_ms;
        }
        self
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from #{}", Self::CONFIG_ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed game config: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
