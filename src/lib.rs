//! Dash Hound - a side-scrolling dodge-the-enemies arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `input`: Keyboard/swipe sampling, snapshotted once per tick
//! - `tuning`: Data-driven game balance
//! - `render`: 2D canvas rendering (wasm32 only)

pub mod input;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod render;

pub use input::InputState;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels, applied to the canvas at startup)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 720.0;

    /// Player sprite sheet frame size
    pub const PLAYER_FRAME_WIDTH: f32 = 200.0;
    pub const PLAYER_FRAME_HEIGHT: f32 = 200.0;
    /// Last frame index of the run cycle (row 0)
    pub const PLAYER_RUN_LAST_FRAME: u32 = 8;
    /// Last frame index of the airborne cycle (row 1)
    pub const PLAYER_AIR_LAST_FRAME: u32 = 5;

    /// Enemy sprite sheet frame size (single row)
    pub const ENEMY_FRAME_WIDTH: f32 = 160.0;
    pub const ENEMY_FRAME_HEIGHT: f32 = 119.0;
    pub const ENEMY_LAST_FRAME: u32 = 5;

    /// Background image size; drawn twice for seamless scrolling
    pub const BACKGROUND_WIDTH: f32 = 2400.0;
    pub const BACKGROUND_HEIGHT: f32 = 720.0;
}
