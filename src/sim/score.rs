//! Score counter and its HUD field

use serde::{Deserialize, Serialize};

use crate::consts::{SCORE_FIELD_MIN_WIDTH, SCORE_VALUE_CELL, SPEEDUP_EVERY};
use crate::renderer::Display;

/// Paddle hits this game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    value: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Zero the score and redraw it
    pub fn reset(&mut self, display: &mut dyn Display) {
        self.value = 0;
        self.refresh(display);
    }

    /// Count one paddle hit and redraw
    pub fn increment(&mut self, display: &mut dyn Display) {
        self.value = self.value.saturating_add(1);
        self.refresh(display);
    }

    /// True on the hits that speed the ball up (10, 20, ...)
    pub fn at_speedup(&self) -> bool {
        self.value > 0 && self.value.is_multiple_of(SPEEDUP_EVERY)
    }

    /// Plain decimal, no padding
    pub fn format(&self) -> String {
        self.value.to_string()
    }

    /// Wipe the score field and draw the current value
    pub fn refresh(&self, display: &mut dyn Display) {
        let text = self.format();
        let (x, y) = SCORE_VALUE_CELL;
        let width = (text.len() as u16).max(SCORE_FIELD_MIN_WIDTH);
        display.clear_text(x, y, width);
        display.draw_text(&text, x, y);
    }
}
