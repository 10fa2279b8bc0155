//! Match state and core simulation types
//!
//! Everything the renderer reads after a tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::settings::MatchSettings;

/// Opaque RGB render attribute carried by entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(0xff, 0xff, 0xff);
    pub const YELLOW: Color = Color(0xff, 0xff, 0x00);
    pub const PITCH: Color = Color(0x00, 0x64, 0x28);
    pub const PADDLE: Color = Color(0x2e, 0x86, 0xc1);

    /// CSS hex string, e.g. `#2e86c1`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Which paddle (and which end of the field) we are talking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by pointer input
    Player,
    /// Right paddle, driven by the tracking heuristic
    Opponent,
}

impl Side {
    /// Horizontal direction a ball travels after bouncing off this side's paddle
    #[inline]
    pub fn away_direction(&self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Play area bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            color: Color::PITCH,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if the vertical span `[top, bottom]` lies strictly inside the middle third
    pub fn in_goal_zone(&self, top: f32, bottom: f32) -> bool {
        let (zone_top, zone_bottom) = crate::goal_zone(self.height);
        top > zone_top && bottom < zone_bottom
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the field
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, (self.height - paddle_height).max(0.0))
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Magnitude used to scale paddle reflections; not kept in sync with `vel`
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
            color: Color::YELLOW,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Serve from the center toward the other end at baseline speed
    pub fn serve(&mut self, center: Vec2, baseline_speed: f32) {
        self.pos = center;
        self.vel.x = -self.vel.x;
        self.speed = baseline_speed;
    }
}

/// A paddle. Player and Opponent share this type and differ only in their controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub score: u32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
            score: 0,
            color: Color::PADDLE,
        }
    }

    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Dashed center line. Decorative only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Net {
    pub x: f32,
    pub y: f32,
    pub segment_width: f32,
    pub segment_height: f32,
    pub spacing: f32,
    pub color: Color,
}

impl Net {
    pub fn for_field(field: &Field) -> Self {
        Self {
            x: (field.width - 2.0) / 2.0,
            y: 0.0,
            segment_width: NET_SEGMENT_WIDTH,
            segment_height: NET_SEGMENT_HEIGHT,
            spacing: NET_SEGMENT_SPACING,
            color: Color::WHITE,
        }
    }

    /// Rectangles making up the dashes, top to bottom (inclusive of the bottom edge)
    pub fn segments(&self, field_height: f32) -> impl Iterator<Item = Rect> + '_ {
        let count = (field_height / self.spacing).floor() as usize + 1;
        (0..count).map(move |i| {
            Rect::new(
                self.x,
                self.y + i as f32 * self.spacing,
                self.segment_width,
                self.segment_height,
            )
        })
    }
}

/// Rally speed and deflection limits, fixed for a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallTuning {
    /// Speed of a freshly served ball
    pub baseline_speed: f32,
    /// Rally speed cap
    pub max_speed: f32,
    /// Speed gained per paddle hit
    pub speed_step: f32,
    /// Deflection at the paddle tips (radians)
    pub max_bounce_angle: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            baseline_speed: BALL_BASELINE_SPEED,
            max_speed: BALL_MAX_SPEED,
            speed_step: BALL_SPEED_STEP,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
        }
    }
}

/// Something worth reacting to that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball crossed an end line
    Goal { scorer: Side, points: u32 },
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball bounced off a paddle; `speed` is the post-hit rally speed
    PaddleHit { side: Side, speed: f32 },
}

/// Complete match state, owned by the game loop and mutated only by `tick`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub field: Field,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub net: Net,
    pub tuning: BallTuning,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    /// Create a new match laid out from the given settings
    pub fn new(settings: &MatchSettings) -> Self {
        let field = Field::new(settings.field_width, settings.field_height);
        let paddle_y = (field.height - settings.paddle_height) / 2.0;
        let player = Paddle::new(
            Side::Player,
            Vec2::new(settings.paddle_inset, paddle_y),
            settings.paddle_width,
            settings.paddle_height,
        );
        let opponent = Paddle::new(
            Side::Opponent,
            Vec2::new(
                field.width - settings.paddle_inset - settings.paddle_width,
                paddle_y,
            ),
            settings.paddle_width,
            settings.paddle_height,
        );
        let ball = Ball::new(
            field.center(),
            settings.initial_velocity,
            settings.ball_radius,
            settings.baseline_speed,
        );

        Self {
            net: Net::for_field(&field),
            field,
            ball,
            player,
            opponent,
            tuning: settings.ball_tuning(),
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Put the ball back in play from the center without awarding anything
    pub fn serve(&mut self) {
        let center = self.field.center();
        self.ball.serve(center, self.tuning.baseline_speed);
    }

    /// Zero both scores and serve a fresh ball
    pub fn reset_match(&mut self) {
        self.player.score = 0;
        self.opponent.score = 0;
        self.serve();
        log::info!("Match reset");
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(&MatchSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let state = MatchState::default();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.ball.speed, 10.0);
        assert_eq!(state.player.pos, Vec2::new(10.0, 250.0));
        assert_eq!(state.opponent.pos, Vec2::new(775.0, 250.0));
        assert_eq!(state.net.x, 399.0);
    }

    #[test]
    fn test_serve_flips_horizontal_direction_only() {
        let mut ball = Ball::new(Vec2::new(3.0, 40.0), Vec2::new(-7.0, 2.0), 12.0, 13.5);
        ball.serve(Vec2::new(400.0, 300.0), 10.0);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(7.0, 2.0));
        assert_eq!(ball.speed, 10.0);
    }

    #[test]
    fn test_reset_match_clears_scores() {
        let mut state = MatchState::default();
        state.player.score = 7;
        state.opponent.score = 4;
        state.ball.pos = Vec2::new(12.0, 34.0);

        state.reset_match();

        assert_eq!(state.player.score, 0);
        assert_eq!(state.opponent.score, 0);
        assert_eq!(state.ball.pos, state.field.center());
    }

    #[test]
    fn test_goal_zone_is_strict() {
        let field = Field::new(800.0, 600.0);
        assert!(field.in_goal_zone(288.0, 312.0));
        assert!(!field.in_goal_zone(200.0, 224.0));
        assert!(!field.in_goal_zone(376.0, 400.0));
        assert!(!field.in_goal_zone(190.0, 214.0));
    }

    #[test]
    fn test_net_segments_cover_field() {
        let field = Field::new(800.0, 600.0);
        let net = Net::for_field(&field);
        let segments: Vec<Rect> = net.segments(field.height).collect();
        assert_eq!(segments.len(), 25);
        assert_eq!(segments[0].top, 0.0);
        assert_eq!(segments[24].top, 600.0);
    }

    #[test]
    fn test_away_direction_points_off_own_paddle() {
        assert_eq!(Side::Player.away_direction(), 1.0);
        assert_eq!(Side::Opponent.away_direction(), -1.0);
        assert_eq!(Side::Player.other(), Side::Opponent);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::PADDLE.to_css(), "#2e86c1");
        assert_eq!(Color::PITCH.to_css(), "#006428");
    }
}
