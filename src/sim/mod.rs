//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, velocities in units per tick
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_hits_paddle};
pub use control::{BallTracker, InputFollower, PaddleController};
pub use state::{Ball, BallTuning, Color, Field, GameEvent, MatchState, Net, Paddle, Side};
pub use tick::{TickInput, check_goal, resolve_paddle_hit, tick};
