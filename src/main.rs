//! Brickout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use brickout::input::{self, InputEvent};
    use brickout::renderer::RenderState;
    use brickout::sim::{GameEvent, GameState, run_frame};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        /// Win banner already shown
        won_announced: bool,
    }

    impl Game {
        fn new() -> Self {
            Self {
                state: GameState::new(),
                render_state: None,
                won_announced: false,
            }
        }

        /// Run one tick and draw the resulting frame
        fn frame(&mut self) {
            let Some(ref mut render_state) = self.render_state else {
                return;
            };

            let (event, drawn) = run_frame(&mut self.state, render_state);

            // Surface the one-shot event even when the draw failed; the
            // latch never re-emits it
            if let Some(GameEvent::GameWon { fails }) = event {
                self.announce_win(fails);
            }

            if let Err(e) = drawn {
                match e {
                    wgpu::SurfaceError::Lost => {
                        if let Some(ref mut render_state) = self.render_state {
                            let (w, h) = render_state.size;
                            render_state.resize(w, h);
                        }
                    }
                    wgpu::SurfaceError::OutOfMemory => log::error!("Out of memory!"),
                    e => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// One-time win banner
        fn announce_win(&mut self, fails: u32) {
            if self.won_announced {
                return;
            }
            self.won_announced = true;
            log::info!("You won with {} fails!", fails);

            let document = web_sys::window().and_then(|w| w.document());
            if let Some(el) = document.and_then(|d| d.get_element_by_id("game-won")) {
                el.set_text_content(Some(&format!("You won with {} fails!", fails)));
                let _ = el.set_attribute("class", "");
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brickout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        request_animation_frame(game);

        log::info!("Brickout running!");
    }

    /// Arrow keys move the paddle the moment the event lands, independent
    /// of the tick cadence.
    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let input_event = match event.key().as_str() {
                "ArrowLeft" => Some(InputEvent::MoveLeft),
                "ArrowRight" => Some(InputEvent::MoveRight),
                _ => None,
            };
            if let Some(input_event) = input_event {
                input::apply(input_event, &mut game.borrow_mut().state.paddle);
            }
        });
        if let Err(e) =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log::warn!("keydown listener registration failed: {:?}", e);
        }
        closure.forget();
    }

    /// One tick per display refresh
    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickout (native) starting...");
    log::info!("Native mode has no window - run the web version for graphics");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a scripted player chases the ball until the wall is
/// cleared, then reports the result.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use brickout::consts::PADDLE_STEP;
    use brickout::input::{self, InputEvent};
    use brickout::sim::{GameEvent, GameState, tick};

    let mut state = GameState::new();
    let max_ticks = 1_000_000;

    for n in 0..max_ticks {
        // Keep the paddle under the ball
        let offset = state.ball.pos.x - state.paddle.x;
        if offset > PADDLE_STEP {
            input::apply(InputEvent::MoveRight, &mut state.paddle);
        } else if offset < -PADDLE_STEP {
            input::apply(InputEvent::MoveLeft, &mut state.paddle);
        }

        if let Some(GameEvent::GameWon { fails }) = tick(&mut state) {
            log::info!("demo won after {} ticks with {} fails", n + 1, fails);
            println!("You won with {} fails!", fails);
            return;
        }
    }

    log::warn!(
        "demo hit the tick limit with {} bricks left and {} fails",
        state.bricks.len(),
        state.fails
    );
}
