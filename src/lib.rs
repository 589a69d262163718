//! Bounce Paddle - single-screen ball and paddle arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, score, game phase)
//! - `input`: Controller bitmasks -> paddle intent, via a lock-free mailbox
//! - `game_loop`: Frame driver synchronized to vertical refresh
//! - `renderer`: Character-cell display collaborator
//! - `platform`: Frame clock and stdin controller source
//! - `settings`: Data-driven runtime options

pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, VerticalSync};
pub use input::{InputController, InputMailbox};
pub use renderer::{Display, SpriteId, TextScreen};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Screen edges (pixels)
    pub const LEFT_EDGE: i32 = 0;
    pub const RIGHT_EDGE: i32 = 320;
    pub const TOP_EDGE: i32 = 0;
    pub const BOTTOM_EDGE: i32 = 224;

    /// Ball defaults
    pub const BALL_WIDTH: i32 = 8;
    pub const BALL_HEIGHT: i32 = 8;
    /// Where the ball rests before the first game
    pub const BALL_BOOT_POS: (i32, i32) = (100, 100);
    /// Where the ball is placed when a game starts
    pub const BALL_START_POS: (i32, i32) = (0, 0);
    pub const BALL_START_VEL: (i32, i32) = (1, 1);

    /// Paddle defaults
    pub const PADDLE_START_X: i32 = 144;
    pub const PADDLE_Y: i32 = 200;
    pub const PADDLE_WIDTH: i32 = 32;
    pub const PADDLE_HEIGHT: i32 = 8;
    pub const PADDLE_SPEED: i32 = 3;

    /// Every Nth paddle hit speeds the ball up by one unit per axis
    pub const SPEEDUP_EVERY: u32 = 10;

    /// Text plane is 40x28 cells of 8x8 pixels
    pub const CELL_SIZE: i32 = 8;
    pub const TEXT_COLUMNS: u16 = 40;
    pub const TEXT_ROWS: u16 = 28;

    /// HUD layout (cells)
    pub const SCORE_LABEL: &str = "SCORE";
    pub const SCORE_LABEL_CELL: (u16, u16) = (1, 1);
    pub const SCORE_VALUE_CELL: (u16, u16) = (1, 2);
    pub const SCORE_FIELD_MIN_WIDTH: u16 = 3;

    /// Prompts are centered on this row
    pub const PROMPT_ROW: u16 = 15;
    /// Area wiped when a game starts: x, y, width, height
    pub const PROMPT_AREA: (u16, u16, u16, u16) = (0, 10, 40, 10);
    pub const MSG_START: &str = "PRESS START TO BEGIN!";
    pub const MSG_GAME_OVER: &str = "GAME OVER! PRESS START TO PLAY AGAIN.";

    /// Default vertical refresh rate (Hz)
    pub const DEFAULT_FRAME_RATE: u32 = 60;
}

/// Column at which `text` must start to appear centered on the text plane
#[inline]
pub fn centered_column(text: &str) -> u16 {
    let half = (text.len() / 2) as u16;
    (consts::TEXT_COLUMNS / 2).saturating_sub(half)
}
