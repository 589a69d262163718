//! Ball kinematics
//!
//! One step per playing frame: bounce off the side and top walls, detect the
//! ball falling out of the bottom, bounce off the paddle (scoring and
//! occasionally speeding up), then integrate and publish the sprite.

use super::collision::{WallHit, ball_paddle_overlap, horizontal_wall, vertical_wall};
use super::state::{Ball, GameWorld};
use crate::consts::*;
use crate::renderer::{Display, SpriteId};

/// What happened to the ball this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallStep {
    /// Ball bottom went past the bottom edge
    pub exited: bool,
    /// Ball bounced off the paddle (and scored)
    pub hit: bool,
}

/// Clamp-and-reflect against the left, right and top walls.
///
/// Returns true if the ball's bottom edge is below the playfield. That case is
/// not clamped; the caller ends the game instead.
pub fn resolve_walls(ball: &mut Ball) -> bool {
    match horizontal_wall(&ball.rect()) {
        WallHit::Low => {
            ball.pos.x = LEFT_EDGE;
            ball.vel.x = -ball.vel.x;
        }
        WallHit::High => {
            ball.pos.x = RIGHT_EDGE - BALL_WIDTH;
            ball.vel.x = -ball.vel.x;
        }
        WallHit::None => {}
    }

    match vertical_wall(&ball.rect()) {
        WallHit::Low => {
            ball.pos.y = TOP_EDGE;
            ball.vel.y = -ball.vel.y;
            false
        }
        WallHit::High => true,
        WallHit::None => false,
    }
}

/// Advance the ball by one frame
pub fn step_ball(world: &mut GameWorld, display: &mut dyn Display) -> BallStep {
    let mut out = BallStep {
        exited: resolve_walls(&mut world.ball),
        hit: false,
    };

    // Paddle test runs even on the frame the ball falls out
    let ball = &mut world.ball;
    if ball.paddle_cooldown > 0 {
        ball.paddle_cooldown -= 1;
    } else if ball_paddle_overlap(&ball.rect(), &world.paddle.rect()) {
        // Sit the ball one pixel above the paddle and send it back up
        ball.pos.y = PADDLE_Y - BALL_HEIGHT - 1;
        ball.vel.y = -ball.vel.y;
        ball.paddle_cooldown = world.paddle_cooldown_frames;

        world.score.increment(display);
        if world.score.at_speedup() {
            ball.vel += ball.vel.signum();
            log::debug!(
                "Speed up at score {}: vel=({}, {})",
                world.score.value(),
                ball.vel.x,
                ball.vel.y
            );
        }
        out.hit = true;
    }

    ball.pos += ball.vel;
    display.set_sprite_position(SpriteId::Ball, ball.pos.x, ball.pos.y);

    out
}
