//! Scene description for renderers
//!
//! Turns a `MatchState` into a flat list of draw commands in paint order.
//! The host decides how to paint them (canvas 2D in the browser).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{MatchState, Paddle, Rect};

pub use crate::sim::Color;

/// Score text size (pixels)
pub const SCORE_FONT_SIZE: f32 = 50.0;
/// Score text font family
pub const SCORE_FONT: &str = "calibri";
/// Goal box outline width
pub const GOAL_LINE_WIDTH: f32 = 5.0;
/// Goal boxes overhang the end lines by this much so only three sides show
pub const GOAL_OVERHANG: f32 = 5.0;

/// A single draw primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        line_width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text anchored at its baseline-left corner
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Draw commands for one frame, in paint order
pub type Scene = Vec<DrawCommand>;

/// Build the frame for the current match state
pub fn build_scene(state: &MatchState) -> Scene {
    let field = &state.field;
    let mut scene = Vec::with_capacity(40);

    // Pitch
    scene.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, field.width, field.height),
        color: field.color,
    });

    // Net
    for rect in state.net.segments(field.height) {
        scene.push(DrawCommand::FillRect {
            rect,
            color: state.net.color,
        });
    }

    // Goal boxes mark the middle third of each end line
    for rect in goal_boxes(field.width, field.height) {
        scene.push(DrawCommand::StrokeRect {
            rect,
            color: Color::WHITE,
            line_width: GOAL_LINE_WIDTH,
        });
    }

    scene.push(DrawCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: state.ball.color,
    });

    push_side(&mut scene, &state.player, field.width / 4.0, field.height);
    push_side(&mut scene, &state.opponent, field.width * 3.0 / 4.0, field.height);

    scene
}

/// Outline rectangles of the two goals (left, right)
pub fn goal_boxes(width: f32, height: f32) -> [Rect; 2] {
    let depth = width / 7.0;
    let (top, bottom) = crate::goal_zone(height);
    [
        Rect::new(-GOAL_OVERHANG, top, depth, bottom - top),
        Rect::new(width + GOAL_OVERHANG - depth, top, depth, bottom - top),
    ]
}

fn push_side(scene: &mut Scene, paddle: &Paddle, score_x: f32, field_height: f32) {
    scene.push(DrawCommand::Text {
        text: paddle.score.to_string(),
        pos: Vec2::new(score_x, field_height / 8.0),
        size: SCORE_FONT_SIZE,
        color: Color::WHITE,
    });
    scene.push(DrawCommand::FillRect {
        rect: paddle.rect(),
        color: paddle.color,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_paint_order() {
        let state = MatchState::default();
        let scene = build_scene(&state);

        // pitch + 25 net dashes + 2 goals + ball + 2 * (score + paddle)
        assert_eq!(scene.len(), 1 + 25 + 2 + 1 + 4);
        assert_eq!(
            scene[0],
            DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, 800.0, 600.0),
                color: Color::PITCH,
            }
        );
        assert!(matches!(scene[26], DrawCommand::StrokeRect { .. }));
        assert!(matches!(scene[28], DrawCommand::FillCircle { .. }));
        assert!(matches!(scene.last(), Some(DrawCommand::FillRect { .. })));
    }

    #[test]
    fn test_scores_rendered_as_text() {
        let mut state = MatchState::default();
        state.player.score = 4;
        state.opponent.score = 7;

        let texts: Vec<(String, Vec2)> = build_scene(&state)
            .into_iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, pos, .. } => Some((text, pos)),
                _ => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec![
                ("4".to_string(), Vec2::new(200.0, 75.0)),
                ("7".to_string(), Vec2::new(600.0, 75.0)),
            ]
        );
    }

    #[test]
    fn test_ball_drawn_where_it_is() {
        let mut state = MatchState::default();
        state.ball.pos = Vec2::new(123.0, 45.0);
        let scene = build_scene(&state);
        assert!(scene.contains(&DrawCommand::FillCircle {
            center: Vec2::new(123.0, 45.0),
            radius: 12.0,
            color: Color::YELLOW,
        }));
    }

    #[test]
    fn test_goal_boxes_span_middle_third() {
        let [left, right] = goal_boxes(700.0, 600.0);
        assert_eq!(left.left, -5.0);
        assert_eq!(left.top, 200.0);
        assert_eq!(left.height, 200.0);
        assert_eq!(left.width, 100.0);
        assert_eq!(right.left, 605.0);
        assert_eq!(right.right(), 705.0);
    }
}
