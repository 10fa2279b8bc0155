//! Goal Pong - Pong on a football pitch
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, tick)
//! - `scene`: Draw-command list built from simulation state
//! - `game`: Fixed-cadence game loop and match lifecycle
//! - `platform`: Pointer input adaptation
//! - `renderer`: Canvas 2D painting of scenes
//! - `settings`: Match geometry and tuning

pub mod game;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game::{Game, Snapshot};
pub use scene::{Color, DrawCommand, Scene, build_scene};
pub use settings::{MatchSettings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Host frame cadence the simulation is tuned for (velocities are per tick)
    pub const TICK_SECS: f32 = 1.0 / 60.0;
    /// Maximum ticks run per host frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 4;
    /// Longest frame gap the loop will try to catch up on
    pub const MAX_FRAME_SECS: f32 = 0.1;

    /// Field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Speed of a freshly served ball
    pub const BALL_BASELINE_SPEED: f32 = 10.0;
    /// Rally acceleration cap
    pub const BALL_MAX_SPEED: f32 = 15.0;
    /// Speed gained per paddle hit
    pub const BALL_SPEED_STEP: f32 = 0.5;
    /// Velocity of the opening serve (not normalized to the baseline speed)
    pub const BALL_INITIAL_VX: f32 = 5.0;
    pub const BALL_INITIAL_VY: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between the player paddle and the left edge
    pub const PADDLE_INSET: f32 = 10.0;

    /// Deflection at the paddle tips (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    /// Fraction of the remaining distance the opponent closes each tick
    pub const TRACKING_GAIN: f32 = 0.1;

    /// Points for a goal scored through the middle third of an edge
    pub const GOAL_ZONE_POINTS: u32 = 3;
    /// Points for any other crossing
    pub const EDGE_POINTS: u32 = 1;

    /// Net geometry
    pub const NET_SEGMENT_WIDTH: f32 = 5.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;
    pub const NET_SEGMENT_SPACING: f32 = 25.0;
}

/// Vertical bounds of the goal zone (middle third) for a field height
#[inline]
pub fn goal_zone(field_height: f32) -> (f32, f32) {
    (field_height / 3.0, 2.0 * field_height / 3.0)
}
