//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one owned `GameWorld`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::score::ScoreTracker;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Attract screen: nothing moves, a prompt waits for START
    #[default]
    Idle,
    /// Active gameplay
    Playing,
}

/// Which centered prompt is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Shown at power-on
    Start,
    /// Shown after the ball falls out
    GameOver,
    /// Cleared while playing
    Hidden,
}

impl Prompt {
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Prompt::Start => Some(MSG_START),
            Prompt::GameOver => Some(MSG_GAME_OVER),
            Prompt::Hidden => None,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    /// Frames left before the paddle can be hit again (0 = can hit)
    #[serde(default)]
    pub paddle_cooldown: u32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: IVec2::new(BALL_BOOT_POS.0, BALL_BOOT_POS.1),
            vel: IVec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            paddle_cooldown: 0,
        }
    }
}

impl Ball {
    /// Put the ball back at the top-left corner, heading down-right
    pub fn reset(&mut self) {
        self.pos = IVec2::new(BALL_START_POS.0, BALL_START_POS.1);
        self.vel = IVec2::new(BALL_START_VEL.0, BALL_START_VEL.1);
        self.paddle_cooldown = 0;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_WIDTH, BALL_HEIGHT)
    }
}

/// The player's paddle. Only `x` moves; `y` is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: i32,
    /// Horizontal speed, one of -PADDLE_SPEED, 0, PADDLE_SPEED
    pub vx: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: PADDLE_START_X,
            vx: 0,
        }
    }
}

impl Paddle {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// Complete game state, owned by the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWorld {
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: ScoreTracker,
    pub phase: GamePhase,
    pub prompt: Prompt,
    /// Frames driven since boot (including idle frames)
    pub frames: u64,
    /// Frames a ball must wait after a paddle hit before it can score again
    pub paddle_cooldown_frames: u32,
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl GameWorld {
    /// Power-on state: idle, start prompt up, nothing moving
    pub fn new() -> Self {
        Self {
            ball: Ball::default(),
            paddle: Paddle::default(),
            score: ScoreTracker::new(),
            phase: GamePhase::Idle,
            prompt: Prompt::Start,
            frames: 0,
            paddle_cooldown_frames: 0,
        }
    }

    pub fn with_paddle_cooldown(mut self, frames: u32) -> Self {
        self.paddle_cooldown_frames = frames;
        self
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
