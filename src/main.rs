//! Brickwall entry point
//!
//! Wasm builds wire the game to a browser canvas; native builds run a short
//! headless demo of the simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brickwall::consts::*;
    use brickwall::renderer::canvas::CanvasSurface;
    use brickwall::renderer::draw_frame;
    use brickwall::sim::{GameOutcome, GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        /// Game-over notification already shown
        notified: bool,
    }

    impl Game {
        fn new(surface: CanvasSurface) -> Self {
            Self {
                state: GameState::new(),
                surface,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                notified: false,
            }
        }

        /// Run simulation ticks on a fixed-step accumulator
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input);
                self.accumulator -= TICK_DT;
                substeps += 1;

                // Pointer position is one-shot; key state persists until keyup
                self.input.pointer_x = None;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_frame(&self.state, &mut self.surface);
        }

        /// On a terminal outcome: notify once, then reload the page so the
        /// whole game restarts from initial constants
        fn finish_if_over(&mut self) {
            if self.notified {
                return;
            }
            let GamePhase::Over(outcome) = self.state.phase else {
                return;
            };
            self.notified = true;

            let message = match outcome {
                GameOutcome::Win => "Congratulations, you win!",
                GameOutcome::Loss => "Game Over!",
            };
            log::info!("run ended: {} (score {})", message, self.state.score());

            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
                let _ = window.location().reload();
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brickwall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(CanvasSurface::new(ctx))));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Brickwall running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Key down - set edge state
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left_pressed = true,
                    "ArrowRight" => g.input.right_pressed = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up - clear edge state
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left_pressed = false,
                    "ArrowRight" => g.input.right_pressed = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - absolute pointer position on the canvas
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let x = event.offset_x() as f32;
                // Only positions over the playfield drive the paddle; the
                // sim clamps again so the paddle stays on the canvas
                if x > 0.0 && x < CANVAS_WIDTH {
                    game.borrow_mut().input.pointer_x = Some(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.finish_if_over();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickwall::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Brickwall (native) starting headless demo...");

    // Drive the paddle straight at the ball so the demo plays itself out
    let mut state = GameState::new();
    let mut ticks = 0u32;
    while !state.is_over() && ticks < 60_000 {
        let input = TickInput {
            pointer_x: Some(state.ball.pos.x),
            ..Default::default()
        };
        tick(&mut state, &input);
        ticks += 1;
    }

    match state.phase {
        GamePhase::Over(outcome) => {
            log::info!("demo ended after {} ticks: {:?}", ticks, outcome);
        }
        GamePhase::Running => log::info!("demo stopped after {} ticks", ticks),
    }
    println!("final score: {}", state.score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
