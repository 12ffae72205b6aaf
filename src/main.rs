//! Jump Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use jump_runner::Tuning;
    use jump_runner::platform::{Key, log_events, queue_key};
    use jump_runner::renderer::{CanvasSurface, draw_frame};
    use jump_runner::sim::{GamePhase, GameState, LoopControl, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: TickInput,
        /// An animation-frame chain is live
        running: bool,
    }

    impl Game {
        fn new(tuning: Tuning, surface: CanvasSurface) -> Self {
            Self {
                state: GameState::new(tuning),
                surface,
                input: TickInput::default(),
                running: false,
            }
        }

        /// Run one frame and repaint
        fn frame(&mut self, time: f64) -> LoopControl {
            let control = tick(&mut self.state, &self.input, time);
            self.input.clear_presses();

            draw_frame(&mut self.surface, &self.state);
            log_events(&mut self.state);
            control
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Jump Runner starting...");

        let surface = match CanvasSurface::attach("gameCanvas") {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game::new(Tuning::load(), surface)));

        setup_input_handlers(game.clone());

        // Start game loop
        start_loop(game);

        log::info!("Jump Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let Some(key) = Key::from_dom_key(&event.key()) else {
                return;
            };
            if key == Key::Jump {
                // Keep space from scrolling the page
                event.prevent_default();
            }

            let restart_loop = {
                let mut g = game.borrow_mut();
                match key {
                    Key::Jump if g.state.phase == GamePhase::GameOver => false,
                    Key::Restart if g.state.phase != GamePhase::GameOver => false,
                    _ => {
                        queue_key(&mut g.input, key);
                        key == Key::Restart && !g.running
                    }
                }
            };

            // The stopped loop only comes back through Restart
            if restart_loop {
                start_loop(game.clone());
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().running = true;
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            game.borrow_mut().running = false;
            return;
        };
        let handle = game.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(handle, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
            game.borrow_mut().running = false;
            return;
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let control = game.borrow_mut().frame(time);

        match control {
            LoopControl::Continue => request_animation_frame(game),
            LoopControl::Stop => game.borrow_mut().running = false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use jump_runner::Tuning;
    use jump_runner::platform::HeadlessRunner;

    /// Two minutes at 60 Hz
    const DEMO_FRAMES: u64 = 120 * 60;

    env_logger::init();
    log::info!("Jump Runner (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let mut runner = HeadlessRunner::new(Tuning::load()).with_idle_mode();
    let summary = runner.run(DEMO_FRAMES);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => log::info!("Run summary: {}", json),
        Err(e) => log::error!("Could not encode run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
