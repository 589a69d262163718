//! Collision geometry for axis-aligned sprites
//!
//! Every object on screen is an unrotated pixel rectangle, so wall checks are
//! edge comparisons and the paddle test is a plain box overlap.

use serde::{Deserialize, Serialize};

use crate::consts::{BOTTOM_EDGE, LEFT_EDGE, RIGHT_EDGE, TOP_EDGE};

/// Pixel rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// Which wall a rectangle crossed on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    None,
    /// Crossed the low edge (left or top)
    Low,
    /// Crossed the high edge (right or bottom)
    High,
}

/// Horizontal wall test against the playfield
pub fn horizontal_wall(r: &Rect) -> WallHit {
    if r.x < LEFT_EDGE {
        WallHit::Low
    } else if r.right() > RIGHT_EDGE {
        WallHit::High
    } else {
        WallHit::None
    }
}

/// Vertical wall test against the playfield
pub fn vertical_wall(r: &Rect) -> WallHit {
    if r.y < TOP_EDGE {
        WallHit::Low
    } else if r.bottom() > BOTTOM_EDGE {
        WallHit::High
    } else {
        WallHit::None
    }
}

/// Ball-vs-paddle overlap.
///
/// Horizontal edges are strict on both sides. Vertically the ball's bottom
/// edge counts as touching when it sits exactly on the paddle's top edge.
pub fn ball_paddle_overlap(ball: &Rect, paddle: &Rect) -> bool {
    let horizontal = ball.x < paddle.right() && ball.right() > paddle.x;
    let vertical = ball.y < paddle.bottom() && ball.bottom() >= paddle.y;
    horizontal && vertical
}
