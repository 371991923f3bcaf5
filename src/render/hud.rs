//! Score and game-over text overlay
//!
//! Text is drawn twice, black with a white copy offset by (+2, +2), the
//! original game's drop-shadow effect.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GAME_HEIGHT, GAME_WIDTH};

const FONT: &str = "40px Helvetica";
const SHADOW_OFFSET: f64 = 2.0;

fn shadowed_text(
    ctx: &CanvasRenderingContext2d,
    text: &str,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str("black");
    ctx.fill_text(text, x, y)?;
    ctx.set_fill_style_str("white");
    ctx.fill_text(text, x + SHADOW_OFFSET, y + SHADOW_OFFSET)
}

pub fn draw_score(ctx: &CanvasRenderingContext2d, score: u32) -> Result<(), JsValue> {
    ctx.set_text_align("left");
    ctx.set_font(FONT);
    shadowed_text(ctx, &format!("Score: {score}"), 20.0, 50.0)
}

pub fn draw_game_over(ctx: &CanvasRenderingContext2d, score: u32) -> Result<(), JsValue> {
    let cx = GAME_WIDTH as f64 / 2.0;
    let cy = GAME_HEIGHT as f64 / 2.0;

    ctx.set_text_align("center");
    ctx.set_font(FONT);
    shadowed_text(ctx, "GAME OVER, try again!", cx, cy)?;
    shadowed_text(ctx, &format!("Your Score: {score}"), cx, cy + 50.0)?;
    shadowed_text(ctx, "Hit Enter or swipe down to restart", cx, cy + 100.0)
}
