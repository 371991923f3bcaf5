//! 2D canvas rendering
//!
//! Reads the sim state and draws it; never mutates gameplay. All fallible
//! canvas calls propagate their `JsValue` errors to the frame driver.

pub mod hud;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::consts::*;
use crate::sim::{Enemy, GamePhase, GameState, Player};

/// A sprite sheet: one image, equally sized frames addressed by
/// (column, row)
pub struct SpriteSheet {
    image: HtmlImageElement,
    frame_size: Vec2,
}

impl SpriteSheet {
    pub fn new(image: HtmlImageElement, frame_size: Vec2) -> Self {
        Self { image, frame_size }
    }

    /// Draw one frame at `pos` (top-left corner), 1:1 scale
    pub fn draw_frame(
        &self,
        ctx: &CanvasRenderingContext2d,
        frame: u32,
        row: u32,
        pos: Vec2,
    ) -> Result<(), JsValue> {
        let (w, h) = (self.frame_size.x as f64, self.frame_size.y as f64);
        ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &self.image,
            frame as f64 * w,
            row as f64 * h,
            w,
            h,
            pos.x as f64,
            pos.y as f64,
            w,
            h,
        )
    }
}

/// The three images the game needs, looked up by element id in the host
/// page
pub struct Assets {
    pub player: SpriteSheet,
    pub enemy: SpriteSheet,
    pub background: HtmlImageElement,
}

impl Assets {
    pub fn load(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            player: SpriteSheet::new(image_element(document, "playerImage")?, Player::frame_size()),
            enemy: SpriteSheet::new(image_element(document, "enemyImage")?, Enemy::frame_size()),
            background: image_element(document, "backgroundImage")?,
        })
    }
}

fn image_element(document: &Document, id: &str) -> Result<HtmlImageElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing image element #{id}")))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an <img>")))
}

/// Owns the 2D context and the assets; draws a full frame from the sim
/// state
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    assets: Assets,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, assets: Assets) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, assets })
    }

    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        self.ctx
            .clear_rect(0.0, 0.0, GAME_WIDTH as f64, GAME_HEIGHT as f64);

        self.draw_background(state)?;

        self.assets.player.draw_frame(
            &self.ctx,
            state.player.anim.frame,
            state.player.row.index(),
            state.player.pos,
        )?;

        for enemy in &state.enemies {
            self.assets
                .enemy
                .draw_frame(&self.ctx, enemy.anim.frame, 0, enemy.pos)?;
        }

        hud::draw_score(&self.ctx, state.score)?;
        if state.phase == GamePhase::GameOver {
            hud::draw_game_over(&self.ctx, state.score)?;
        }
        Ok(())
    }

    /// Two copies of the background; the second overlaps the first by one
    /// frame's scroll to hide the seam.
    fn draw_background(&self, state: &GameState) -> Result<(), JsValue> {
        let (w, h) = (BACKGROUND_WIDTH as f64, BACKGROUND_HEIGHT as f64);
        let x = state.background.x as f64;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(&self.assets.background, x, 0.0, w, h)?;
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.assets.background,
            x + w - state.tuning.scroll_speed as f64,
            0.0,
            w,
            h,
        )
    }
}
