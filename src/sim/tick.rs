//! Fixed timestep simulation tick
//!
//! The Idle/Playing state machine. Advances the world by one frame and owns
//! the two transitions between phases.

use super::ball::step_ball;
use super::paddle::step_paddle;
use super::state::{GamePhase, GameWorld, Prompt};
use crate::centered_column;
use crate::consts::{PROMPT_AREA, PROMPT_ROW};
use crate::renderer::Display;

/// Input for a single tick, drained from the mailbox once per frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest paddle velocity requested by the controller
    pub paddle_vx: i32,
    /// START was pressed while the game looked idle
    pub start: bool,
}

/// Phase change that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Playing
    Started,
    /// Playing -> Idle (ball fell out)
    Ended,
}

/// Draw a prompt centered on the prompt row and remember it
pub fn show_prompt(world: &mut GameWorld, prompt: Prompt, display: &mut dyn Display) {
    if let Some(text) = prompt.text() {
        display.draw_text(text, centered_column(text), PROMPT_ROW);
    }
    world.prompt = prompt;
}

/// Idle -> Playing: fresh score, ball back in the corner, prompt wiped
pub fn start_game(world: &mut GameWorld, display: &mut dyn Display) {
    world.score.reset(display);
    world.ball.reset();

    let (x, y, w, h) = PROMPT_AREA;
    display.clear_text_area(x, y, w, h);
    world.prompt = Prompt::Hidden;

    world.phase = GamePhase::Playing;
    log::info!("Game started at frame {}", world.frames);
}

/// Playing -> Idle: show the game over prompt
pub fn end_game(world: &mut GameWorld, display: &mut dyn Display) {
    show_prompt(world, Prompt::GameOver, display);
    world.phase = GamePhase::Idle;
    log::info!(
        "Game over: score {} at frame {}",
        world.score.value(),
        world.frames
    );
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(world) {
            log::debug!("Final state: {}", json);
        }
    }
}

/// Advance the game by one frame
pub fn tick(
    world: &mut GameWorld,
    input: &TickInput,
    display: &mut dyn Display,
) -> Option<Transition> {
    world.frames += 1;

    // Velocity follows the controller even while idle
    world.paddle.vx = input.paddle_vx;

    let mut transition = None;
    if input.start && world.phase == GamePhase::Idle {
        start_game(world, display);
        transition = Some(Transition::Started);
    }

    // Frozen while idle
    if world.phase != GamePhase::Playing {
        return transition;
    }

    let ball = step_ball(world, display);
    step_paddle(&mut world.paddle, display);

    if ball.exited {
        end_game(world, display);
        transition = Some(Transition::Ended);
    }

    transition
}
