//! Property-based tests for simulation invariants.
//!
//! These tests use proptest to check that the playfield bounds, scoring and
//! speed-up rules hold for arbitrary positions and velocities.

use bounce_paddle::TextScreen;
use bounce_paddle::sim::{
    Ball, GamePhase, GameWorld, Paddle, TickInput, resolve_walls, step_ball, step_paddle, tick,
};
use glam::IVec2;
use proptest::prelude::*;

/// Helper to build a playing world with the ball and paddle placed
fn playing_world(ball_pos: IVec2, ball_vel: IVec2, paddle_x: i32) -> GameWorld {
    let mut world = GameWorld::new();
    world.phase = GamePhase::Playing;
    world.ball.pos = ball_pos;
    world.ball.vel = ball_vel;
    world.paddle.x = paddle_x;
    world
}

fn ball_pos() -> impl Strategy<Value = IVec2> {
    (-20i32..340, -20i32..240).prop_map(|(x, y)| IVec2::new(x, y))
}

fn ball_vel() -> impl Strategy<Value = IVec2> {
    (-6i32..=6, -6i32..=6).prop_map(|(x, y)| IVec2::new(x, y))
}

proptest! {
    #[test]
    fn prop_paddle_stays_on_screen(x in -50i32..400, vx in prop::sample::select(vec![-3, 0, 3])) {
        let mut screen = TextScreen::new();
        let mut paddle = Paddle { x, vx };
        step_paddle(&mut paddle, &mut screen);
        prop_assert!((0..=288).contains(&paddle.x));
    }

    #[test]
    fn prop_walls_keep_ball_in_columns(pos in ball_pos(), vel in ball_vel()) {
        let mut ball = Ball { pos, vel, paddle_cooldown: 0 };
        let exited = resolve_walls(&mut ball);

        prop_assert!((0..=312).contains(&ball.pos.x));
        prop_assert!(ball.pos.y >= 0);
        prop_assert_eq!(exited, pos.y + 8 > 224);
        if exited {
            // Not clamped
            prop_assert_eq!(ball.pos.y, pos.y);
        }
    }

    #[test]
    fn prop_score_moves_only_on_hits(
        pos in ball_pos(),
        vel in ball_vel(),
        paddle_x in 0i32..=288,
        prior in 0u32..40,
    ) {
        let mut screen = TextScreen::new();
        let mut world = playing_world(pos, vel, paddle_x);
        for _ in 0..prior {
            world.score.increment(&mut screen);
        }

        let step = step_ball(&mut world, &mut screen);
        let expected = if step.hit { prior + 1 } else { prior };
        prop_assert_eq!(world.score.value(), expected);
    }

    #[test]
    fn prop_speedup_by_sign_on_tenth_hits(
        x in 130i32..180,
        y in 192i32..208,
        vel in ball_vel(),
        prior in 0u32..40,
    ) {
        let mut screen = TextScreen::new();
        let mut world = playing_world(IVec2::new(x, y), vel, 144);
        for _ in 0..prior {
            world.score.increment(&mut screen);
        }

        // Velocity as it stands after the wall bounce
        let mut probe = world.ball.clone();
        resolve_walls(&mut probe);

        let step = step_ball(&mut world, &mut screen);
        if step.hit {
            let mut expected = IVec2::new(probe.vel.x, -probe.vel.y);
            if world.score.value() % 10 == 0 {
                expected += expected.signum();
            }
            prop_assert_eq!(world.ball.vel, expected);
            prop_assert_eq!(world.ball.pos.y, 191 + expected.y);
        }
    }

    #[test]
    fn prop_idle_world_is_frozen(
        pos in ball_pos(),
        paddle_x in 0i32..=288,
        vxs in prop::collection::vec(prop::sample::select(vec![-3, 0, 3]), 1..30),
    ) {
        let mut screen = TextScreen::new();
        let mut world = GameWorld::new();
        world.ball.pos = pos;
        world.paddle.x = paddle_x;

        for vx in vxs {
            let input = TickInput { paddle_vx: vx, start: false };
            prop_assert_eq!(tick(&mut world, &input, &mut screen), None);
        }
        prop_assert_eq!(world.phase, GamePhase::Idle);
        prop_assert_eq!(world.ball.pos, pos);
        prop_assert_eq!(world.paddle.x, paddle_x);
    }

    #[test]
    fn prop_playing_frames_respect_bounds(
        vxs in prop::collection::vec(prop::sample::select(vec![-3, 0, 3]), 1..400),
    ) {
        let mut screen = TextScreen::new();
        let mut world = GameWorld::new();
        tick(&mut world, &TickInput { paddle_vx: 0, start: true }, &mut screen);

        for vx in vxs {
            if !world.is_playing() {
                break;
            }
            let input = TickInput { paddle_vx: vx, start: false };
            tick(&mut world, &input, &mut screen);
            prop_assert!((0..=288).contains(&world.paddle.x));
            // Integrated position is within one step of the clamped column range
            let speed = world.ball.vel.x.abs();
            prop_assert!(world.ball.pos.x >= -speed && world.ball.pos.x <= 312 + speed);
        }
    }
}
