//! Per-frame simulation tick
//!
//! One call per animation frame, in a fixed order: background scroll,
//! collision test (against enemy positions from before this tick's
//! movement), player update, spawner, enemy update, then removal and
//! scoring. A collision flips the phase to `GameOver` but the rest of the
//! tick still runs; the frame driver stops scheduling afterwards.

use rand::Rng;

use super::collision::HitCircle;
use super::state::{Enemy, GamePhase, GameState, Player, SpriteRow};
use crate::consts::*;
use crate::tuning::Tuning;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// ArrowUp or swipe-up
    pub jump: bool,
    /// ArrowDown or swipe-down
    pub dive: bool,
}

/// Advance the game state by one animation frame
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.background.scroll(state.tuning.scroll_speed);

    // Collision is tested before enemies move this tick
    let player_circle = HitCircle::from_sprite(
        state.player.pos,
        Player::frame_size(),
        state.tuning.hitbox_inset,
    );
    for enemy in &state.enemies {
        let enemy_circle =
            HitCircle::from_sprite(enemy.pos, Enemy::frame_size(), state.tuning.hitbox_inset);
        if enemy_circle.overlaps(&player_circle) {
            state.phase = GamePhase::GameOver;
            log::info!("round over: hit enemy {} (score {})", enemy.id, state.score);
            break;
        }
    }

    update_player(&mut state.player, input, &state.tuning, dt_ms);
    update_spawner(state, dt_ms);

    for enemy in &mut state.enemies {
        enemy.anim.advance(dt_ms);
        enemy.pos.x -= enemy.speed;
        if enemy.pos.x < -ENEMY_FRAME_WIDTH {
            enemy.avoided = true;
        }
    }

    // Deferred removal; one point per avoided enemy
    let before = state.enemies.len();
    state.enemies.retain(|e| !e.avoided);
    state.score += (before - state.enemies.len()) as u32;
}

fn update_player(player: &mut Player, input: &TickInput, tuning: &Tuning, dt_ms: f32) {
    player.anim.advance(dt_ms);

    // Horizontal: fixed run speed, clamped to the playfield
    player.vel.x = if input.right {
        tuning.run_speed
    } else if input.left {
        -tuning.run_speed
    } else {
        0.0
    };
    player.pos.x = (player.pos.x + player.vel.x).clamp(0.0, GAME_WIDTH - PLAYER_FRAME_WIDTH);

    // Vertical: jump only from the ground; dive overrides gravity even
    // mid-air; otherwise gravity while airborne, run row while grounded
    if input.jump && player.on_ground() {
        player.vel.y = -tuning.jump_speed;
    } else if input.dive {
        player.vel.y = tuning.dive_speed;
    } else if player.on_ground() {
        player.vel.y = 0.0;
        player.set_row(SpriteRow::Run);
    } else {
        player.set_row(SpriteRow::Airborne);
        player.vel.y += tuning.gravity;
    }
    player.pos.y = (player.pos.y + player.vel.y).clamp(0.0, Player::ground());
}

/// Spawn pacing: a fresh jitter is drawn every tick and added to the base
/// interval; the timer only resets when it wins that roll. The per-tick
/// re-roll is the game's only difficulty variation.
fn update_spawner(state: &mut GameState, dt_ms: f32) {
    let jitter: f32 = if state.tuning.spawn_jitter_ms > 0.0 {
        state.rng.random_range(0.0..state.tuning.spawn_jitter_ms)
    } else {
        0.0
    };
    if state.spawn_timer_ms > state.tuning.spawn_interval_ms + jitter {
        let (min, max) = (state.tuning.enemy_speed_min, state.tuning.enemy_speed_max);
        let speed = if min < max {
            state.rng.random_range(min..max)
        } else {
            min
        };
        let id = state.next_entity_id();
        log::debug!("spawning enemy {} (speed {:.1} px/frame)", id, speed);
        let enemy = Enemy::new(id, speed, &state.tuning);
        state.enemies.push(enemy);
        state.spawn_timer_ms = 0.0;
    } else {
        state.spawn_timer_ms += dt_ms;
    }
}
