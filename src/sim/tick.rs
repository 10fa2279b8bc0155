//! Fixed-step simulation tick
//!
//! Core game step that advances the match deterministically. Velocities are
//! in field units per tick; there is no delta-time scaling.

use super::collision::ball_hits_paddle;
use super::control::PaddleController;
use super::state::{Ball, BallTuning, GameEvent, MatchState, Paddle, Side};
use crate::consts::{EDGE_POINTS, GOAL_ZONE_POINTS};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest player paddle top edge (from pointer position), `None` if unchanged
    pub player_y: Option<f32>,
}

/// Advance the match by one tick
///
/// Order matters and matches the feel of the classic canvas game:
/// goal check on the pre-move position, translation, paddle control,
/// wall bounce, then a single paddle-hit pass.
pub fn tick(
    state: &mut MatchState,
    input: &TickInput,
    player: &mut dyn PaddleController,
    opponent: &mut dyn PaddleController,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // A goal ends the tick: the served ball is shown at the center for a frame
    if let Some(goal) = check_goal(state) {
        events.push(goal);
        return events;
    }

    state.ball.pos += state.ball.vel;

    state.player.pos.y = player.next_y(&state.player, &state.ball, &state.field, input);
    state.opponent.pos.y = opponent.next_y(&state.opponent, &state.ball, &state.field, input);

    // Elastic bounce off top/bottom, no position correction
    if state.ball.top() < 0.0 || state.ball.bottom() > state.field.height {
        state.ball.vel.y = -state.ball.vel.y;
        log::trace!("Wall bounce at y={:.1}", state.ball.pos.y);
        events.push(GameEvent::WallBounce);
    }

    // Only the paddle on the ball's half can be hit
    let side = if state.ball.right() < state.field.width / 2.0 {
        Side::Player
    } else {
        Side::Opponent
    };
    let paddle = *state.paddle(side);
    if ball_hits_paddle(state.ball.pos, state.ball.radius, &paddle.rect()) {
        resolve_paddle_hit(&mut state.ball, &paddle, &state.tuning);
        log::debug!(
            "{:?} hit, vel=({:.2}, {:.2}), rally speed {:.1}",
            side,
            state.ball.vel.x,
            state.ball.vel.y,
            state.ball.speed
        );
        events.push(GameEvent::PaddleHit {
            side,
            speed: state.ball.speed,
        });
    }

    events
}

/// Award a point if the ball's leading edge is past an end line, then serve.
///
/// Uses the current (pre-move) position. A crossing whose vertical span lies
/// strictly inside the middle third is worth three points.
pub fn check_goal(state: &mut MatchState) -> Option<GameEvent> {
    let ball = &state.ball;
    let scorer = if ball.left() < 0.0 {
        Side::Opponent
    } else if ball.right() > state.field.width {
        Side::Player
    } else {
        return None;
    };

    let points = if state.field.in_goal_zone(ball.top(), ball.bottom()) {
        GOAL_ZONE_POINTS
    } else {
        EDGE_POINTS
    };

    let paddle = state.paddle_mut(scorer);
    paddle.score += points;
    log::info!(
        "{:?} scores {} (now {}-{})",
        scorer,
        points,
        state.player.score,
        state.opponent.score
    );

    state.serve();
    Some(GameEvent::Goal { scorer, points })
}

/// Reflect the ball off a paddle it overlaps.
///
/// The deflection angle grows linearly with the distance from the paddle
/// center, up to `max_bounce_angle` at the tips. The horizontal component
/// always points away from the paddle. Rally speed then steps up to the cap.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, tuning: &BallTuning) {
    let half_height = paddle.height / 2.0;
    // Grazing contacts past the tips are treated as tip hits
    let collision_point = ((ball.pos.y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
    let angle = tuning.max_bounce_angle * collision_point;

    let direction = paddle.side.away_direction();
    ball.vel.x = direction * ball.speed * angle.cos();
    ball.vel.y = ball.speed * angle.sin();

    ball.speed = (ball.speed + tuning.speed_step).min(tuning.max_speed);
}
