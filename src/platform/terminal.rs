//! Text screen printed to a terminal

use std::io::Write;

use crate::renderer::{Display, SpriteId, TextScreen};

/// Wraps a `TextScreen` and redraws the terminal on every sprite flush
#[derive(Debug)]
pub struct TerminalScreen<W: Write> {
    screen: TextScreen,
    out: W,
    /// Redraw every Nth flush (1 = every frame)
    redraw_every: u64,
    failed: bool,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W, redraw_every: u64) -> Self {
        Self {
            screen: TextScreen::new(),
            out,
            redraw_every: redraw_every.max(1),
            failed: false,
        }
    }

    pub fn screen(&self) -> &TextScreen {
        &self.screen
    }

    fn redraw(&mut self) {
        // Cursor home, then the whole frame
        let frame = self.screen.compose();
        let result = write!(self.out, "\x1b[H{}", frame).and_then(|_| self.out.flush());
        if let Err(e) = result {
            // Keep simulating; only complain once
            if !self.failed {
                log::error!("Terminal write failed: {}", e);
                self.failed = true;
            }
        }
    }
}

impl<W: Write> Display for TerminalScreen<W> {
    fn set_sprite_position(&mut self, sprite: SpriteId, x: i32, y: i32) {
        self.screen.set_sprite_position(sprite, x, y);
    }

    fn draw_text(&mut self, text: &str, cell_x: u16, cell_y: u16) {
        self.screen.draw_text(text, cell_x, cell_y);
    }

    fn clear_text(&mut self, cell_x: u16, cell_y: u16, width: u16) {
        self.screen.clear_text(cell_x, cell_y, width);
    }

    fn clear_text_area(&mut self, cell_x: u16, cell_y: u16, width: u16, height: u16) {
        self.screen.clear_text_area(cell_x, cell_y, width, height);
    }

    fn update_sprites(&mut self) {
        self.screen.update_sprites();
        if self.screen.flushes() % self.redraw_every == 0 {
            self.redraw();
        }
    }
}
