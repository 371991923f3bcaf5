//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the game state
//! - Stable iteration order (enemies by spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::HitCircle;
pub use state::{Background, Enemy, GamePhase, GameState, Player, SpriteAnim, SpriteRow};
pub use tick::{TickInput, tick};
