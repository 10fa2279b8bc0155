//! Game loop and match lifecycle
//!
//! `Game` owns the match state and both paddle controllers. Hosts call
//! `advance` from their frame callback (or `tick` directly), feed pointer
//! input through `set_player_y`, and read back a `Snapshot` or a `Scene`.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_SECS, MAX_TICKS_PER_FRAME, TICK_SECS};
use crate::scene::{Scene, build_scene};
use crate::settings::MatchSettings;
use crate::sim::{
    Ball, BallTracker, Field, GameEvent, InputFollower, MatchState, Net, Paddle,
    PaddleController, TickInput, tick,
};

/// Read-only view of everything a renderer needs after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub net: Net,
    pub field: Field,
    pub time_ticks: u64,
}

impl From<&MatchState> for Snapshot {
    fn from(state: &MatchState) -> Self {
        Self {
            ball: state.ball,
            player: state.player,
            opponent: state.opponent,
            net: state.net,
            field: state.field,
            time_ticks: state.time_ticks,
        }
    }
}

/// Game instance holding all state
pub struct Game {
    state: MatchState,
    player: Box<dyn PaddleController>,
    opponent: Box<dyn PaddleController>,
    /// Last known player input; kept across ticks
    input: TickInput,
    accumulator: f32,
    /// Events since the last `drain_events`
    events: Vec<GameEvent>,
}

impl Game {
    /// Pointer-driven player against the tracking opponent
    pub fn new(settings: &MatchSettings) -> Self {
        Self::with_controllers(
            settings,
            Box::new(InputFollower),
            Box::new(BallTracker::new(settings.tracking_gain)),
        )
    }

    /// Both paddles track the ball; the match plays itself
    pub fn attract(settings: &MatchSettings) -> Self {
        Self::with_controllers(
            settings,
            Box::new(BallTracker::new(settings.tracking_gain)),
            Box::new(BallTracker::new(settings.tracking_gain)),
        )
    }

    pub fn with_controllers(
        settings: &MatchSettings,
        player: Box<dyn PaddleController>,
        opponent: Box<dyn PaddleController>,
    ) -> Self {
        Self {
            state: MatchState::new(settings),
            player,
            opponent,
            input: TickInput::default(),
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    /// Set the player paddle's top edge. The latest value wins.
    pub fn set_player_y(&mut self, y: f32) {
        self.input.player_y = Some(y);
    }

    /// Run one simulation step and return the resulting snapshot
    pub fn tick(&mut self) -> Snapshot {
        let events = tick(
            &mut self.state,
            &self.input,
            self.player.as_mut(),
            self.opponent.as_mut(),
        );
        self.events.extend(events);
        self.snapshot()
    }

    /// Zero both scores and serve from the center
    pub fn reset_match(&mut self) {
        self.state.reset_match();
    }

    /// Host frame callback: run as many whole ticks as the elapsed time covers
    ///
    /// Returns the number of ticks run. Velocities stay in units per tick;
    /// this only keeps the tick rate steady on fast or slow displays.
    pub fn advance(&mut self, elapsed_secs: f32) -> u32 {
        if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return 0;
        }
        self.accumulator += elapsed_secs.min(MAX_FRAME_SECS);

        let mut ticks = 0;
        while self.accumulator >= TICK_SECS && ticks < MAX_TICKS_PER_FRAME {
            self.tick();
            self.accumulator -= TICK_SECS;
            ticks += 1;
        }

        // Too far behind: drop the backlog instead of spiraling
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_SECS {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        ticks
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    pub fn scene(&self) -> Scene {
        build_scene(&self.state)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&MatchSettings::default())
    }
}
