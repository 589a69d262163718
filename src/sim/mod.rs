//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, integer pixels only
//! - No clocks, threads or randomness
//! - Output goes through the `Display` trait only

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod score;
pub mod state;
pub mod tick;

pub use ball::{BallStep, resolve_walls, step_ball};
pub use collision::{Rect, WallHit, ball_paddle_overlap};
pub use paddle::step_paddle;
pub use score::ScoreTracker;
pub use state::{Ball, GamePhase, GameWorld, Paddle, Prompt};
pub use tick::{TickInput, Transition, end_game, show_prompt, start_game, tick};
