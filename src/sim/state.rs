//! Game state and core simulation types
//!
//! Everything a round needs to advance deterministically lives here: the
//! seeded RNG, the spawn timer, and every entity. Movement is frame-locked
//! (applied once per animation frame); only sprite animation and the spawn
//! timer consume delta time.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Round ended by a collision
    GameOver,
}

/// Which row of the player sprite sheet is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteRow {
    Run,
    Airborne,
}

impl SpriteRow {
    /// Row index into the sprite sheet
    pub fn index(self) -> u32 {
        match self {
            SpriteRow::Run => 0,
            SpriteRow::Airborne => 1,
        }
    }

    /// Last frame index of this row's cycle
    pub fn last_frame(self) -> u32 {
        match self {
            SpriteRow::Run => PLAYER_RUN_LAST_FRAME,
            SpriteRow::Airborne => PLAYER_AIR_LAST_FRAME,
        }
    }
}

/// Sprite-sheet frame timer, shared by the player and enemies
///
/// Accumulates delta time; once the accumulator exceeds the frame interval
/// the frame advances (wrapping past `last_frame`) and the accumulator
/// resets to zero. Resetting rather than subtracting matches the original
/// game's pacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteAnim {
    pub frame: u32,
    pub last_frame: u32,
    pub timer_ms: f32,
    pub interval_ms: f32,
}

impl SpriteAnim {
    pub fn new(last_frame: u32, fps: f32) -> Self {
        Self {
            frame: 0,
            last_frame,
            timer_ms: 0.0,
            interval_ms: 1000.0 / fps,
        }
    }

    /// Advance the accumulator by `dt_ms`, stepping the frame when due.
    pub fn advance(&mut self, dt_ms: f32) {
        if self.timer_ms > self.interval_ms {
            self.frame = if self.frame >= self.last_frame {
                0
            } else {
                self.frame + 1
            };
            self.timer_ms = 0.0;
        } else {
            self.timer_ms += dt_ms;
        }
    }
}

/// The player entity
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the sprite frame
    pub pos: Vec2,
    /// Pixels per frame (frame-locked, not per second)
    pub vel: Vec2,
    pub row: SpriteRow,
    pub anim: SpriteAnim,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Self::start_pos(),
            vel: Vec2::ZERO,
            row: SpriteRow::Run,
            anim: SpriteAnim::new(SpriteRow::Run.last_frame(), tuning.animation_fps),
        }
    }

    /// Spawn position: centered-ish horizontally, slightly above the ground
    /// so the player falls in on the first frames.
    fn start_pos() -> Vec2 {
        Vec2::new(
            GAME_WIDTH / 2.0 - PLAYER_FRAME_WIDTH / 2.0 - 100.0,
            Self::ground() - 50.0,
        )
    }

    /// The y coordinate at which the sprite stands on the ground
    pub fn ground() -> f32 {
        GAME_HEIGHT - PLAYER_FRAME_HEIGHT
    }

    pub fn on_ground(&self) -> bool {
        self.pos.y >= Self::ground()
    }

    /// Switch sprite row, keeping the frame timer running
    pub fn set_row(&mut self, row: SpriteRow) {
        self.row = row;
        self.anim.last_frame = row.last_frame();
    }

    pub fn frame_size() -> Vec2 {
        Vec2::new(PLAYER_FRAME_WIDTH, PLAYER_FRAME_HEIGHT)
    }

    /// Reset for a new round. Velocity and the frame timer deliberately
    /// carry over, matching the original game's restart.
    pub fn reset(&mut self) {
        self.pos = Self::start_pos();
        self.set_row(SpriteRow::Run);
    }
}

/// An enemy entity, moving left at a fixed per-frame speed
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner of the sprite frame
    pub pos: Vec2,
    /// Pixels per frame, fixed at spawn
    pub speed: f32,
    pub anim: SpriteAnim,
    /// Set once the enemy has fully left the playfield; removal (and the
    /// score increment) happens at the end of the tick.
    pub avoided: bool,
}

impl Enemy {
    pub fn new(id: u32, speed: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: Vec2::new(GAME_WIDTH, GAME_HEIGHT - ENEMY_FRAME_HEIGHT),
            speed,
            anim: SpriteAnim::new(ENEMY_LAST_FRAME, tuning.animation_fps),
            avoided: false,
        }
    }

    pub fn frame_size() -> Vec2 {
        Vec2::new(ENEMY_FRAME_WIDTH, ENEMY_FRAME_HEIGHT)
    }
}

/// Scrolling background: one image drawn twice, wrapped when the first copy
/// has fully scrolled off.
#[derive(Debug, Clone, Default)]
pub struct Background {
    /// x offset of the first copy (always <= 0 while running)
    pub x: f32,
}

impl Background {
    pub fn scroll(&mut self, speed: f32) {
        self.x -= speed;
        if self.x < -BACKGROUND_WIDTH {
            self.x = 0.0;
        }
    }
}

/// Complete game state for one session (deterministic given a seed and a
/// per-tick input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Milliseconds accumulated toward the next enemy spawn
    pub spawn_timer_ms: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub background: Background,
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and balance numbers
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            spawn_timer_ms: 0.0,
            player: Player::new(&tuning),
            enemies: Vec::new(),
            background: Background::default(),
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset for a fresh round after game over.
    ///
    /// Score, phase, enemies, background offset and the player's position
    /// and sprite row reset; the spawn timer, RNG state, player velocity and
    /// frame accumulator carry over (original behavior).
    pub fn restart(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Running;
        self.enemies.clear();
        self.background = Background::default();
        self.player.reset();
        log::info!("round restarted (seed {})", self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anim_accumulates_then_steps() {
        let mut anim = SpriteAnim::new(8, 20.0);
        assert_eq!(anim.interval_ms, 50.0);

        // First call only accumulates
        anim.advance(40.0);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.timer_ms, 40.0);

        // Still not past the interval (strict comparison)
        anim.advance(10.0);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.timer_ms, 50.0);

        anim.advance(1.0);
        assert_eq!(anim.timer_ms, 51.0);

        // Past the interval: step and reset to zero
        anim.advance(16.0);
        assert_eq!(anim.frame, 1);
        assert_eq!(anim.timer_ms, 0.0);
    }

    #[test]
    fn test_anim_wraps_after_last_frame() {
        let mut anim = SpriteAnim::new(2, 20.0);
        anim.frame = 2;
        anim.timer_ms = 60.0;
        anim.advance(16.0);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_player_start_position() {
        let player = Player::new(&Tuning::default());
        assert_eq!(player.pos, Vec2::new(200.0, 470.0));
        assert!(!player.on_ground());
    }

    #[test]
    fn test_background_wraps() {
        let mut bg = Background::default();
        bg.x = -BACKGROUND_WIDTH + 2.0;
        bg.scroll(5.0);
        assert_eq!(bg.x, 0.0);

        bg.scroll(5.0);
        assert_eq!(bg.x, -5.0);
    }

    #[test]
    fn test_restart_keeps_spawn_timer_and_rng() {
        let mut state = GameState::new(7, Tuning::default());
        state.score = 12;
        state.phase = GamePhase::GameOver;
        state.spawn_timer_ms = 450.0;
        state.player.vel = Vec2::new(5.0, 20.0);
        state.player.anim.timer_ms = 33.0;
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, 9.0, &Tuning::default()));
        state.background.x = -300.0;

        let rng_before = state.rng.clone();
        state.restart();

        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.enemies.is_empty());
        assert_eq!(state.background.x, 0.0);
        assert_eq!(state.player.pos, Vec2::new(200.0, 470.0));
        assert_eq!(state.player.row, SpriteRow::Run);
        // Deliberate carry-over
        assert_eq!(state.spawn_timer_ms, 450.0);
        assert_eq!(state.player.vel, Vec2::new(5.0, 20.0));
        assert_eq!(state.player.anim.timer_ms, 33.0);
        assert_eq!(state.rng, rng_before);
    }
}
