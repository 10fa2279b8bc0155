//! Goal Pong entry point
//!
//! Browser builds paint to a canvas every animation frame. Native builds run
//! a headless match against a scripted player and print the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use goal_pong::consts::TICK_SECS;
    use goal_pong::platform::player_y_from_pointer;
    use goal_pong::renderer::paint;
    use goal_pong::{Game, MatchSettings};

    /// Game plus the canvas it paints to
    struct Host {
        game: Game,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
    }

    impl Host {
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                TICK_SECS
            };
            self.last_time = time;

            self.game.advance(dt);
            // Goals and hits are logged by the simulation; keep the buffer bounded
            self.game.drain_events();

            let scene = self.game.scene();
            if let Err(e) = paint(&mut self.ctx, &scene) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Goal Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or("no #pong canvas")?
            .dyn_into()?;

        let settings = MatchSettings::load();
        canvas.set_width(settings.field_width as u32);
        canvas.set_height(settings.field_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into()?;

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(&settings),
            ctx,
            last_time: 0.0,
        }));

        setup_input(host.clone(), &canvas)?;
        request_animation_frame(host);

        log::info!("Goal Pong running!");
        Ok(())
    }

    fn setup_input(host: Rc<RefCell<Host>>, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Pointer moves the player paddle
        {
            let host = host.clone();
            let canvas_el = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let top = canvas_el.get_bounding_client_rect().top() as f32;
                let mut h = host.borrow_mut();
                let state = h.game.state();
                let y = player_y_from_pointer(
                    event.client_y() as f32,
                    top,
                    &state.field,
                    state.player.height,
                );
                if let Some(y) = y {
                    h.game.set_player_y(y);
                }
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // R resets the match
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key().eq_ignore_ascii_case("r") {
                    host.borrow_mut().game.reset_match();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            host.borrow_mut().frame(time);
            request_animation_frame(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use goal_pong::sim::{GameEvent, MatchState};
    use goal_pong::{Game, MatchSettings};

    /// Ninety seconds of play at the nominal frame rate
    const DEMO_TICKS: u32 = 90 * 60;
    /// Fastest the scripted player can move its hand, units per tick
    const HAND_SPEED: f32 = 9.0;
    /// How far off the scripted player aims, at most
    const AIM_ERROR: f32 = 45.0;

    /// A sloppy human: chases the ball with limited hand speed and shaky aim
    pub struct ScriptedPlayer {
        rng: Pcg32,
        y: f32,
        aim_error: f32,
    }

    impl ScriptedPlayer {
        pub fn new(seed: u64, start_y: f32) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed),
                y: start_y,
                aim_error: 0.0,
            }
        }

        /// Next pointer-driven paddle position
        pub fn next_y(&mut self, state: &MatchState) -> f32 {
            // Re-aim now and then
            if self.rng.random_bool(0.05) {
                self.aim_error = self.rng.random_range(-AIM_ERROR..AIM_ERROR);
            }
            let target = state.ball.pos.y + self.aim_error - state.player.height / 2.0;
            let delta = (target - self.y).clamp(-HAND_SPEED, HAND_SPEED);
            self.y = state.field.clamp_paddle_y(self.y + delta, state.player.height);
            self.y
        }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let mut args = std::env::args().skip(1);
        let seed = match args.next() {
            Some(s) => s.parse::<u64>()?,
            None => 12345,
        };
        let settings = match args.next() {
            Some(path) => {
                let json = std::fs::read_to_string(&path)?;
                log::info!("Loaded settings from {}", path);
                MatchSettings::from_json(&json)?
            }
            None => MatchSettings::default(),
        };

        let mut game = Game::new(&settings);
        let mut player = ScriptedPlayer::new(seed, game.state().player.pos.y);
        log::info!("Demo match with seed {} for {} ticks", seed, DEMO_TICKS);

        let mut hits = 0u32;
        for _ in 0..DEMO_TICKS {
            let y = player.next_y(game.state());
            game.set_player_y(y);
            game.tick();

            for event in game.drain_events() {
                match event {
                    GameEvent::Goal { scorer, points } => {
                        let state = game.state();
                        log::debug!(
                            "Tick {}: goal for {:?} (+{}), {} - {}",
                            state.time_ticks,
                            scorer,
                            points,
                            state.player.score,
                            state.opponent.score
                        );
                    }
                    GameEvent::PaddleHit { .. } => hits += 1,
                    GameEvent::WallBounce => {}
                }
            }
        }

        let snapshot = game.snapshot();
        println!(
            "Final score: player {} - {} opponent ({} paddle hits)",
            snapshot.player.score, snapshot.opponent.score, hits
        );
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Goal Pong (native) starting...");
    log::info!("Native mode is a headless demo - build for wasm32 to play");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
