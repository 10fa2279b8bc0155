//! Paddle position strategies
//!
//! Both paddles are the same entity; what differs is how their next
//! vertical position is produced each tick.

use super::state::{Ball, Field, Paddle};
use super::tick::TickInput;
use crate::consts::TRACKING_GAIN;

/// Produces a paddle's next top-edge y given the ball and this tick's input
pub trait PaddleController {
    fn next_y(&mut self, paddle: &Paddle, ball: &Ball, field: &Field, input: &TickInput) -> f32;
}

/// Follows the externally supplied player position.
///
/// Holds the last known value when no input arrived this tick. No clamping:
/// sanitizing pointer input is the input adapter's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFollower;

impl PaddleController for InputFollower {
    fn next_y(&mut self, paddle: &Paddle, _ball: &Ball, _field: &Field, input: &TickInput) -> f32 {
        input.player_y.unwrap_or(paddle.pos.y)
    }
}

/// Proportional tracking: closes a fixed fraction of the gap between the
/// paddle center and the ball every tick, so it lags behind fast balls.
#[derive(Debug, Clone, Copy)]
pub struct BallTracker {
    pub gain: f32,
}

impl BallTracker {
    pub fn new(gain: f32) -> Self {
        Self { gain }
    }
}

impl Default for BallTracker {
    fn default() -> Self {
        Self::new(TRACKING_GAIN)
    }
}

impl PaddleController for BallTracker {
    fn next_y(&mut self, paddle: &Paddle, ball: &Ball, field: &Field, _input: &TickInput) -> f32 {
        let y = paddle.pos.y + (ball.pos.y - paddle.center_y()) * self.gain;
        field.clamp_paddle_y(y, paddle.height)
    }
}
