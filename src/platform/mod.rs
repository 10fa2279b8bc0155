//! Platform abstraction layer
//!
//! Converts raw host input into simulation input. The simulation trusts
//! whatever it is given, so sanitizing happens here.

use crate::sim::Field;

/// Paddle top edge that centers the paddle on the pointer
///
/// `canvas_top` is the canvas's offset from the top of the viewport, as
/// reported by its bounding rect.
#[inline]
pub fn pointer_to_paddle_y(pointer_y: f32, canvas_top: f32, paddle_height: f32) -> f32 {
    pointer_y - canvas_top - paddle_height / 2.0
}

/// Drop non-finite positions and keep the paddle fully on the field
pub fn sanitize_paddle_y(y: f32, field: &Field, paddle_height: f32) -> Option<f32> {
    if !y.is_finite() {
        log::warn!("Discarding non-finite paddle position {}", y);
        return None;
    }
    Some(field.clamp_paddle_y(y, paddle_height))
}

/// Pointer event to sanitized player paddle position, in one step
pub fn player_y_from_pointer(
    pointer_y: f32,
    canvas_top: f32,
    field: &Field,
    paddle_height: f32,
) -> Option<f32> {
    sanitize_paddle_y(
        pointer_to_paddle_y(pointer_y, canvas_top, paddle_height),
        field,
        paddle_height,
    )
}
