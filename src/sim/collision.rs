//! Collision detection between the ball and paddles
//!
//! The ball is treated as its bounding square, so this is a plain
//! axis-aligned overlap test. Touching edges do not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left anchored (canvas coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounding square of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Strict overlap: rectangles sharing only an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.top < other.bottom()
            && self.right() > other.left
            && self.bottom() > other.top
    }
}

/// Check whether a ball (center, radius) overlaps a paddle rectangle
#[inline]
pub fn ball_hits_paddle(ball_pos: Vec2, ball_radius: f32, paddle: &Rect) -> bool {
    paddle.overlaps(&Rect::around_circle(ball_pos, ball_radius))
}
