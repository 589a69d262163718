//! End-to-end frames through the loop, with input arriving via the pad callback.

use std::sync::Arc;

use bounce_paddle::input::{BUTTON_RIGHT, BUTTON_START, JOY_1};
use bounce_paddle::sim::{GamePhase, GameWorld, Prompt, Transition};
use bounce_paddle::{GameLoop, InputController, InputMailbox, SpriteId, TextScreen, VerticalSync};
use glam::IVec2;

/// Vsync that returns immediately
struct NoWait;

impl VerticalSync for NoWait {
    fn wait_for_vsync(&mut self) {}
}

fn setup() -> (GameLoop<TextScreen, NoWait>, InputController) {
    let mailbox = Arc::new(InputMailbox::new());
    let pad = InputController::new(mailbox.clone());
    let mut game = GameLoop::new(GameWorld::new(), mailbox, TextScreen::new(), NoWait);
    game.boot();
    (game, pad)
}

fn press_start(pad: &InputController) {
    pad.on_input(JOY_1, BUTTON_START, BUTTON_START);
    pad.on_input(JOY_1, BUTTON_START, 0);
}

/// Run frames until a transition or the frame limit
fn run_until_transition(
    game: &mut GameLoop<TextScreen, NoWait>,
    limit: u32,
) -> Option<Transition> {
    for _ in 0..limit {
        if let Some(t) = game.frame() {
            return Some(t);
        }
    }
    None
}

#[test]
fn test_untouched_game_ends_when_ball_falls() {
    let (mut game, pad) = setup();
    press_start(&pad);
    assert_eq!(game.frame(), Some(Transition::Started));

    // Ball runs the diagonal past the resting paddle and drops out
    assert_eq!(run_until_transition(&mut game, 400), Some(Transition::Ended));
    let world = game.world();
    assert_eq!(world.phase, GamePhase::Idle);
    assert_eq!(world.prompt, Prompt::GameOver);
    assert_eq!(world.score.value(), 0);
    assert!(world.ball.rect().bottom() > 224);
    assert_eq!(
        game.display().text_at(2, 15, 37),
        "GAME OVER! PRESS START TO PLAY AGAIN."
    );
    assert!(!game.mailbox().is_playing());
}

#[test]
fn test_steered_paddle_returns_ball() {
    let (mut game, pad) = setup();
    press_start(&pad);
    pad.on_input(JOY_1, BUTTON_RIGHT, BUTTON_RIGHT);

    for _ in 0..12 {
        game.frame();
    }
    pad.on_input(JOY_1, BUTTON_RIGHT, 0);
    assert_eq!(game.world().paddle.x, 180);

    // Ball meets the paddle on its way down
    for _ in 0..300 {
        game.frame();
        if game.world().score.value() > 0 {
            break;
        }
    }
    let world = game.world();
    assert_eq!(world.score.value(), 1);
    assert_eq!(world.phase, GamePhase::Playing);
    assert!(world.ball.vel.y < 0);
    assert_eq!(world.paddle.x, 180);
    assert_eq!(game.display().text_at(1, 2, 3), "1");
}

#[test]
fn test_restart_after_game_over() {
    let (mut game, pad) = setup();
    press_start(&pad);
    game.frame();
    assert_eq!(run_until_transition(&mut game, 400), Some(Transition::Ended));

    // Idle frames leave everything where it fell
    let resting = game.world().ball.pos;
    for _ in 0..10 {
        game.frame();
    }
    assert_eq!(game.world().ball.pos, resting);
    assert_eq!(
        game.display().sprite_position(SpriteId::Ball),
        Some((resting.x, resting.y))
    );

    press_start(&pad);
    assert_eq!(game.frame(), Some(Transition::Started));
    let world = game.world();
    assert_eq!(world.score.value(), 0);
    // Reset to the corner, then one step taken this frame
    assert_eq!(world.ball.pos, IVec2::new(1, 1));
    assert_eq!(world.ball.vel, IVec2::new(1, 1));
    assert!(!game.display().area_has_text(0, 10, 40, 10));
}

#[test]
fn test_paddle_velocity_kept_while_idle() {
    let (mut game, pad) = setup();
    pad.on_input(JOY_1, BUTTON_RIGHT, BUTTON_RIGHT);
    for _ in 0..5 {
        game.frame();
    }
    assert_eq!(game.world().paddle.vx, 3);
    assert_eq!(game.world().paddle.x, 144);

    press_start(&pad);
    game.frame();
    assert_eq!(game.world().paddle.x, 147);
}
