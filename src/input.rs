//! Input sampling
//!
//! Keyboard and touch events mutate an `InputState`; the frame driver
//! snapshots it into a `TickInput` once per tick. Swipes latch once per
//! gesture: a touchmove that crosses the threshold sets the flag and
//! reports the crossing, touchend clears everything.

use crate::sim::TickInput;

/// Arrow keys the game tracks. Enter is deliberately not tracked; it only
/// triggers a restart while game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(ArrowKey::Up),
            "ArrowDown" => Some(ArrowKey::Down),
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }
}

/// A swipe gesture that has just crossed the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Down,
}

/// Aggregated input state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    /// pageY recorded at touchstart, anchor for the current gesture
    touch_anchor_y: Option<f32>,
    swipe_up: bool,
    swipe_down: bool,
    swipe_threshold: f32,
}

impl InputState {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe_threshold,
            ..Default::default()
        }
    }

    pub fn key_down(&mut self, key: ArrowKey) {
        match key {
            ArrowKey::Up => self.up = true,
            ArrowKey::Down => self.down = true,
            ArrowKey::Left => self.left = true,
            ArrowKey::Right => self.right = true,
        }
    }

    pub fn key_up(&mut self, key: ArrowKey) {
        match key {
            ArrowKey::Up => self.up = false,
            ArrowKey::Down => self.down = false,
            ArrowKey::Left => self.left = false,
            ArrowKey::Right => self.right = false,
        }
    }

    pub fn touch_start(&mut self, page_y: f32) {
        self.touch_anchor_y = Some(page_y);
    }

    /// Compare the current touch position against the gesture anchor.
    /// Returns the swipe direction only on the move that latches it.
    pub fn touch_move(&mut self, page_y: f32) -> Option<Swipe> {
        let anchor = self.touch_anchor_y?;
        let distance = page_y - anchor;
        if distance < -self.swipe_threshold && !self.swipe_up {
            self.swipe_up = true;
            return Some(Swipe::Up);
        }
        if distance > self.swipe_threshold && !self.swipe_down {
            self.swipe_down = true;
            return Some(Swipe::Down);
        }
        None
    }

    pub fn touch_end(&mut self) {
        self.touch_anchor_y = None;
        self.swipe_up = false;
        self.swipe_down = false;
    }

    /// Snapshot the current state for one simulation tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            jump: self.up || self.swipe_up,
            dive: self.down || self.swipe_down,
        }
    }
}
