//! Canvas 2D rendering
//!
//! Paints a `Scene` through the small `Canvas2d` surface. The browser build
//! implements it for `CanvasRenderingContext2d`.

use glam::Vec2;

use crate::scene::{DrawCommand, SCORE_FONT, Scene};
use crate::sim::Rect;

/// The handful of 2D primitives a scene needs
pub trait Canvas2d {
    type Error;

    fn fill_rect(&mut self, rect: &Rect, color: &str);
    fn stroke_rect(&mut self, rect: &Rect, color: &str, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), Self::Error>;
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str)
    -> Result<(), Self::Error>;
}

/// Paint every command in order
pub fn paint<C: Canvas2d>(canvas: &mut C, scene: &Scene) -> Result<(), C::Error> {
    for cmd in scene {
        match cmd {
            DrawCommand::FillRect { rect, color } => canvas.fill_rect(rect, &color.to_css()),
            DrawCommand::StrokeRect {
                rect,
                color,
                line_width,
            } => canvas.stroke_rect(rect, &color.to_css(), *line_width),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => canvas.fill_circle(*center, *radius, &color.to_css())?,
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => {
                let font = format!("{}px {}", size, SCORE_FONT);
                canvas.fill_text(text, *pos, &font, &color.to_css())?;
            }
        }
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
impl Canvas2d for web_sys::CanvasRenderingContext2d {
    type Error = wasm_bindgen::JsValue;

    fn fill_rect(&mut self, rect: &Rect, color: &str) {
        self.set_fill_style_str(color);
        web_sys::CanvasRenderingContext2d::fill_rect(
            self,
            rect.left as f64,
            rect.top as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn stroke_rect(&mut self, rect: &Rect, color: &str, line_width: f32) {
        self.begin_path();
        self.set_line_width(line_width as f64);
        self.set_stroke_style_str(color);
        self.rect(
            rect.left as f64,
            rect.top as f64,
            rect.width as f64,
            rect.height as f64,
        );
        self.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), Self::Error> {
        self.set_fill_style_str(color);
        self.begin_path();
        self.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.close_path();
        self.fill();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        font: &str,
        color: &str,
    ) -> Result<(), Self::Error> {
        self.set_fill_style_str(color);
        self.set_font(font);
        web_sys::CanvasRenderingContext2d::fill_text(self, text, pos.x as f64, pos.y as f64)
    }
}
