//! Match settings
//!
//! Geometry and tuning for a match. Defaults reproduce the classic 800x600
//! canvas game; a JSON document may override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BallTuning;

/// Errors from loading or validating settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be a positive number - got `{value}`")]
    NonPositive { field: &'static str, value: f32 },
    #[error("Paddle height {paddle} does not fit in a field {field} tall")]
    PaddleTooTall { paddle: f32, field: f32 },
    #[error("Baseline speed {baseline} exceeds max speed {max}")]
    SpeedRange { baseline: f32, max: f32 },
    #[error("`{field}` must be in {range} - got `{value}`")]
    OutOfRange {
        field: &'static str,
        value: f32,
        range: &'static str,
    },
    #[error("`{field}` must be finite - got `{value}`")]
    NotFinite { field: &'static str, value: Vec2 },
    #[error("Paddle inset {inset} plus width {width} reaches past the midline at {midline}")]
    PaddlePastMidline { inset: f32, width: f32, midline: f32 },
}

/// Match geometry and tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Opening serve velocity (units per tick)
    pub initial_velocity: Vec2,
    pub baseline_speed: f32,
    pub max_speed: f32,
    pub speed_step: f32,
    /// Deflection at the paddle tips (radians)
    pub max_bounce_angle: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its end line
    pub paddle_inset: f32,
    /// Opponent tracking gain (fraction of the gap closed per tick)
    pub tracking_gain: f32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            initial_velocity: Vec2::new(BALL_INITIAL_VX, BALL_INITIAL_VY),
            baseline_speed: BALL_BASELINE_SPEED,
            max_speed: BALL_MAX_SPEED,
            speed_step: BALL_SPEED_STEP,
            max_bounce_angle: MAX_BOUNCE_ANGLE,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            tracking_gain: TRACKING_GAIN,
        }
    }
}

impl MatchSettings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject geometry the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("baseline_speed", self.baseline_speed),
            ("max_speed", self.max_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::NonPositive { field, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(SettingsError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }

        if self.baseline_speed > self.max_speed {
            return Err(SettingsError::SpeedRange {
                baseline: self.baseline_speed,
                max: self.max_speed,
            });
        }

        // Rally speed never drops on a hit
        if !self.speed_step.is_finite() || self.speed_step < 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "speed_step",
                value: self.speed_step,
                range: "[0, inf)",
            });
        }

        // Steeper than a right angle would send the ball back at the paddle
        let angle = self.max_bounce_angle;
        if angle.is_nan() || angle <= 0.0 || angle >= std::f32::consts::FRAC_PI_2 {
            return Err(SettingsError::OutOfRange {
                field: "max_bounce_angle",
                value: angle,
                range: "(0, pi/2)",
            });
        }

        // A gain of 1 or more overshoots the ball
        let gain = self.tracking_gain;
        if gain.is_nan() || gain <= 0.0 || gain >= 1.0 {
            return Err(SettingsError::OutOfRange {
                field: "tracking_gain",
                value: gain,
                range: "(0, 1)",
            });
        }

        if !self.initial_velocity.is_finite() {
            return Err(SettingsError::NotFinite {
                field: "initial_velocity",
                value: self.initial_velocity,
            });
        }

        if !self.paddle_inset.is_finite() || self.paddle_inset < 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "paddle_inset",
                value: self.paddle_inset,
                range: "[0, inf)",
            });
        }

        // Each paddle must stay on its own half to be hit-tested
        let midline = self.field_width / 2.0;
        if self.paddle_inset + self.paddle_width >= midline {
            return Err(SettingsError::PaddlePastMidline {
                inset: self.paddle_inset,
                width: self.paddle_width,
                midline,
            });
        }

        Ok(())
    }

    /// Rally limits carried into the match state
    pub fn ball_tuning(&self) -> BallTuning {
        BallTuning {
            baseline_speed: self.baseline_speed,
            max_speed: self.max_speed,
            speed_step: self.speed_step,
            max_bounce_angle: self.max_bounce_angle,
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "goal_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native builds always start from defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
