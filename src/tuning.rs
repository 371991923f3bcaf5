//! Data-driven game balance
//!
//! All movement is in pixels per frame (frame-locked, like the original
//! game); timers are in milliseconds. The host page may embed a JSON
//! `<script type="application/json" id="tuning">` block overriding any
//! subset of fields.

use serde::Deserialize;

/// Game balance numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Sprite sheet playback rate for player and enemies
    pub animation_fps: f32,
    /// Horizontal player speed, pixels per frame
    pub run_speed: f32,
    /// Upward velocity applied on jump (stored positive)
    pub jump_speed: f32,
    /// Downward velocity applied while diving
    pub dive_speed: f32,
    /// Added to vertical velocity each airborne frame
    pub gravity: f32,
    /// Background scroll, pixels per frame
    pub scroll_speed: f32,
    /// Enemy speed range, pixels per frame; drawn uniformly at spawn
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// Base interval between spawns, milliseconds
    pub spawn_interval_ms: f32,
    /// Upper bound of the per-tick random addition to the interval
    pub spawn_jitter_ms: f32,
    /// Shrinks a sprite's collision circle from its frame rectangle
    pub hitbox_inset: f32,
    /// Vertical travel before a touch gesture counts as a swipe
    pub swipe_threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            animation_fps: 20.0,
            run_speed: 5.0,
            jump_speed: 20.0,
            dive_speed: 20.0,
            gravity: 0.6,
            scroll_speed: 5.0,
            enemy_speed_min: 7.0,
            enemy_speed_max: 14.0,
            spawn_interval_ms: 700.0,
            spawn_jitter_ms: 20_000.0,
            hitbox_inset: 25.0,
            swipe_threshold: 30.0,
        }
    }
}

impl Tuning {
    /// DOM id of the optional override block
    const ELEMENT_ID: &'static str = "tuning";

    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from the host page, falling back to defaults when the
    /// element is absent or unparseable (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(element) = document.get_element_by_id(Self::ELEMENT_ID) else {
            log::info!("no tuning override, using defaults");
            return Self::default();
        };
        let json = element.text_content().unwrap_or_default();
        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("loaded tuning override from host page");
                tuning
            }
            Err(err) => {
                log::warn!("invalid tuning override ({err}), using defaults");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
