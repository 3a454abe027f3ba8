//! Canvas Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent};

    use canvas_breakout::GameConfig;
    use canvas_breakout::platform::KeyTracker;
    use canvas_breakout::renderer::{build_scene, canvas2d};
    use canvas_breakout::sim::{FrameEvent, GameSimulation};

    /// Game instance holding all state
    struct Game {
        sim: GameSimulation,
        keys: KeyTracker,
        ctx: CanvasRenderingContext2d,
        started: bool,
    }

    impl Game {
        fn render(&self) {
            if let Err(e) = canvas2d::draw(&self.ctx, &build_scene(&self.sim)) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Advance one frame and redraw. Returns false once the session is over.
        fn frame(&mut self) -> bool {
            let result = self.sim.advance_frame(self.keys.frame_input());
            self.render();

            match result.event {
                FrameEvent::None => {}
                FrameEvent::LifeLost => log::info!("Lives left: {}", result.lives),
                FrameEvent::LevelAdvanced => log::info!("Level {}", result.level + 1),
                FrameEvent::GameOver => {
                    alert("GAME OVER!");
                    return false;
                }
                FrameEvent::GameWon => {
                    alert("YOU WIN!");
                    return false;
                }
            }
            true
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::load();
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            sim: GameSimulation::new(config, seed),
            keys: KeyTracker::new(),
            ctx,
            started: false,
        }));
        log::info!("Game initialized with seed: {}", seed);

        game.borrow().render();

        setup_input_handlers(game.clone());
        setup_start_button(game);

        log::info!("Canvas Breakout ready!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up events are lost while the page is unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let Some(btn) = document
            .query_selector(".start-btn")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            log::warn!("No start button found, starting immediately");
            game.borrow_mut().started = true;
            request_animation_frame(game);
            return;
        };

        let button = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            {
                let mut g = game.borrow_mut();
                if g.started {
                    return;
                }
                g.started = true;
            }
            button.set_disabled(true);
            log::info!("Game started");
            request_animation_frame(game.clone());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let running = game.borrow_mut().frame();
        if running {
            request_animation_frame(game);
        } else {
            log::info!("Game loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Frame cap for the headless run (about 30 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u64 = 60 * 60 * 30;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Breakout (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let outcome = run_headless(seed);
    println!(
        "Seed {}: {:?} after {} frames - level {}, score {}, lives {}",
        seed,
        outcome.event,
        outcome.frames,
        outcome.level + 1,
        outcome.score,
        outcome.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
struct HeadlessOutcome {
    event: canvas_breakout::FrameEvent,
    frames: u64,
    level: u32,
    score: u64,
    lives: u8,
}

/// Play a whole session with a paddle that chases the ball
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64) -> HeadlessOutcome {
    use canvas_breakout::{FrameEvent, FrameInput, GameConfig, GameSimulation};

    let mut sim = GameSimulation::new(GameConfig::load(), seed);
    let mut result = sim.current_frame();
    let mut frames = 0;

    while frames < MAX_HEADLESS_FRAMES && !result.event.is_terminal() {
        let paddle_center = result.paddle.pos.x + result.paddle.size.x / 2.0;
        let input = FrameInput {
            left_held: result.ball.pos.x < paddle_center - 4.0,
            right_held: result.ball.pos.x > paddle_center + 4.0,
        };
        result = sim.advance_frame(input);
        frames += 1;

        if result.event == FrameEvent::LevelAdvanced {
            log::info!("Frame {}: reached level {}", frames, result.level + 1);
        }
    }

    HeadlessOutcome {
        event: result.event,
        frames,
        level: result.level,
        score: result.score,
        lives: result.lives,
    }
}
