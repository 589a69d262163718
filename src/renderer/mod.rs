//! Rendering collaborator interface
//!
//! The simulation never draws anything itself. It hands sprite positions and
//! HUD text to a `Display`, which owns the actual video output.

pub mod text_screen;

pub use text_screen::TextScreen;

/// Hardware sprites the game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Ball,
    Paddle,
}

/// Sprite and text-plane operations the core needs from the video side
pub trait Display {
    /// Move a sprite (pixel coordinates, top-left corner)
    fn set_sprite_position(&mut self, sprite: SpriteId, x: i32, y: i32);

    /// Draw text starting at a cell on the text plane
    fn draw_text(&mut self, text: &str, cell_x: u16, cell_y: u16);

    /// Blank `width` cells of a single row
    fn clear_text(&mut self, cell_x: u16, cell_y: u16, width: u16);

    /// Blank a rectangle of cells
    fn clear_text_area(&mut self, cell_x: u16, cell_y: u16, width: u16, height: u16);

    /// Push pending sprite changes to the screen (once per frame)
    fn update_sprites(&mut self);
}
