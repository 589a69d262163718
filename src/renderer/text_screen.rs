//! Character-cell display
//!
//! A 40x28 text plane with two sprites drawn on top. Used by the native
//! binary (printed to the terminal) and by tests to observe what the core
//! asked the video side to show.

use std::collections::HashMap;

use super::{Display, SpriteId};
use crate::consts::{BALL_WIDTH, CELL_SIZE, PADDLE_WIDTH, TEXT_COLUMNS, TEXT_ROWS};

const BLANK: char = ' ';

/// Text plane plus sprite table
#[derive(Debug, Clone)]
pub struct TextScreen {
    cells: Vec<char>,
    /// Positions written since the last flush
    pending: HashMap<SpriteId, (i32, i32)>,
    /// Positions visible on screen
    shown: HashMap<SpriteId, (i32, i32)>,
    flushes: u64,
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TextScreen {
    pub fn new() -> Self {
        Self {
            cells: vec![BLANK; TEXT_COLUMNS as usize * TEXT_ROWS as usize],
            pending: HashMap::new(),
            shown: HashMap::new(),
            flushes: 0,
        }
    }

    #[inline]
    fn index(cell_x: u16, cell_y: u16) -> Option<usize> {
        if cell_x < TEXT_COLUMNS && cell_y < TEXT_ROWS {
            Some(cell_y as usize * TEXT_COLUMNS as usize + cell_x as usize)
        } else {
            None
        }
    }

    /// Character at a cell (blank when out of range)
    pub fn cell(&self, cell_x: u16, cell_y: u16) -> char {
        Self::index(cell_x, cell_y)
            .map(|i| self.cells[i])
            .unwrap_or(BLANK)
    }

    /// One full row of the text plane
    pub fn row(&self, cell_y: u16) -> String {
        (0..TEXT_COLUMNS).map(|x| self.cell(x, cell_y)).collect()
    }

    /// `width` characters starting at a cell, trailing blanks trimmed
    pub fn text_at(&self, cell_x: u16, cell_y: u16, width: u16) -> String {
        let s: String = (cell_x..cell_x.saturating_add(width))
            .map(|x| self.cell(x, cell_y))
            .collect();
        s.trim_end().to_string()
    }

    /// True if any cell in the rectangle holds a non-blank character
    pub fn area_has_text(&self, cell_x: u16, cell_y: u16, width: u16, height: u16) -> bool {
        (cell_y..cell_y.saturating_add(height)).any(|y| {
            (cell_x..cell_x.saturating_add(width)).any(|x| self.cell(x, y) != BLANK)
        })
    }

    /// Sprite position as of the last `update_sprites`
    pub fn sprite_position(&self, sprite: SpriteId) -> Option<(i32, i32)> {
        self.shown.get(&sprite).copied()
    }

    /// How many frames have been flushed
    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    /// Render the text plane with sprites overlaid, one line per row
    pub fn compose(&self) -> String {
        let mut grid = self.cells.clone();
        let mut stamp = |sprite: SpriteId, glyph: char, width_px: i32| {
            if let Some(&(x, y)) = self.shown.get(&sprite) {
                let row = y.div_euclid(CELL_SIZE);
                let first = x.div_euclid(CELL_SIZE);
                let last = (x + width_px - 1).div_euclid(CELL_SIZE);
                for col in first..=last {
                    if (0..TEXT_COLUMNS as i32).contains(&col) && (0..TEXT_ROWS as i32).contains(&row)
                    {
                        grid[row as usize * TEXT_COLUMNS as usize + col as usize] = glyph;
                    }
                }
            }
        };
        stamp(SpriteId::Paddle, '=', PADDLE_WIDTH);
        stamp(SpriteId::Ball, 'O', BALL_WIDTH);

        let mut out = String::with_capacity(grid.len() + TEXT_ROWS as usize);
        for line in grid.chunks(TEXT_COLUMNS as usize) {
            out.extend(line.iter());
            out.push('\n');
        }
        out
    }
}

impl Display for TextScreen {
    fn set_sprite_position(&mut self, sprite: SpriteId, x: i32, y: i32) {
        self.pending.insert(sprite, (x, y));
    }

    fn draw_text(&mut self, text: &str, cell_x: u16, cell_y: u16) {
        for (offset, ch) in text.chars().enumerate() {
            let Some(x) = cell_x.checked_add(offset as u16) else {
                break;
            };
            match Self::index(x, cell_y) {
                Some(i) => self.cells[i] = ch,
                None => break,
            }
        }
    }

    fn clear_text(&mut self, cell_x: u16, cell_y: u16, width: u16) {
        self.clear_text_area(cell_x, cell_y, width, 1);
    }

    fn clear_text_area(&mut self, cell_x: u16, cell_y: u16, width: u16, height: u16) {
        for y in cell_y..cell_y.saturating_add(height) {
            for x in cell_x..cell_x.saturating_add(width) {
                if let Some(i) = Self::index(x, y) {
                    self.cells[i] = BLANK;
                }
            }
        }
    }

    fn update_sprites(&mut self) {
        self.shown.extend(self.pending.drain());
        self.flushes += 1;
    }
}
