//! Paddle movement

use super::state::Paddle;
use crate::consts::{LEFT_EDGE, PADDLE_WIDTH, PADDLE_Y, RIGHT_EDGE};
use crate::renderer::{Display, SpriteId};

/// Apply velocity, keep the paddle on screen, publish the sprite
pub fn step_paddle(paddle: &mut Paddle, display: &mut dyn Display) {
    paddle.x = (paddle.x + paddle.vx).clamp(LEFT_EDGE, RIGHT_EDGE - PADDLE_WIDTH);
    display.set_sprite_position(SpriteId::Paddle, paddle.x, PADDLE_Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::TextScreen;

    #[test]
    fn test_paddle_moves_by_velocity() {
        let mut screen = TextScreen::new();
        let mut paddle = Paddle { x: 144, vx: 3 };
        step_paddle(&mut paddle, &mut screen);
        assert_eq!(paddle.x, 147);
    }

    #[test]
    fn test_paddle_clamped_at_left_edge() {
        let mut screen = TextScreen::new();
        let mut paddle = Paddle { x: 0, vx: -3 };
        step_paddle(&mut paddle, &mut screen);
        assert_eq!(paddle.x, 0);

        let mut paddle = Paddle { x: 1, vx: -3 };
        step_paddle(&mut paddle, &mut screen);
        assert_eq!(paddle.x, 0);
    }

    #[test]
    fn test_paddle_clamped_at_right_edge() {
        let mut screen = TextScreen::new();
        let mut paddle = Paddle { x: 287, vx: 3 };
        step_paddle(&mut paddle, &mut screen);
        assert_eq!(paddle.x, 288);
        screen.update_sprites();
        assert_eq!(screen.sprite_position(SpriteId::Paddle), Some((288, 200)));
    }
}
