//! Bug Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{FocusEvent, KeyboardEvent, Window};

    use bug_crossing::platform::action_for_key;
    use bug_crossing::renderer::{CanvasRenderer, Resources};
    use bug_crossing::sim::Sprite;
    use bug_crossing::{Game, HighScores, Settings};

    /// Game plus the surface it draws on
    struct App {
        game: Game,
        renderer: CanvasRenderer,
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bug Crossing starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        // Nothing is drawn until every sprite is ready
        let resources = Resources::load(&Sprite::ALL).await?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(Settings::load(), HighScores::load(), seed);
        log::info!("Game initialized with seed: {}", seed);

        let (width, height) = game.state.map.canvas_size();
        let renderer = CanvasRenderer::new(&document, resources, width, height)?;

        let app = Rc::new(RefCell::new(App { game, renderer }));

        setup_input_handlers(&window, app.clone())?;
        setup_auto_pause(&window, app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Bug Crossing running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Keep arrow keys from scrolling the page
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key().starts_with("Arrow") {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Actions fire on release, one per key
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&event.key()) {
                    app.borrow_mut().game.queue(action);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_auto_pause(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
            app.borrow_mut().game.pause_if_running();
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut app = app.borrow_mut();
            app.game.frame(time);

            // Drawn every frame, paused or not
            let scene = app.game.scene();
            if let Err(e) = app.renderer.render(&scene) {
                log::warn!("Render error: {:?}", e);
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        web_sys::console::error_1(&e);
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bug Crossing (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let score = headless::run(seed, 120.0);
    println!("Autopilot finished with score {} (seed {})", score, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use bug_crossing::platform::Action;
    use bug_crossing::sim::{Direction, GameState};
    use bug_crossing::{Game, HighScores, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frames between autopilot decisions
    const THINK_EVERY: u64 = 20;

    /// Play with a simple autopilot for `seconds` of game time.
    /// Returns the score reached.
    pub fn run(seed: u64, seconds: f64) -> u32 {
        let mut game = Game::new(Settings::default(), HighScores::new(), seed);
        let frames = (seconds * 1000.0 / FRAME_MS) as u64;

        for frame in 0..frames {
            if frame % THINK_EVERY == 0 && next_lane_clear(&game.state) {
                game.queue(Action::Move(Direction::Up));
            }
            game.frame(frame as f64 * FRAME_MS);

            if game.state.collided {
                log::info!(
                    "Hit after {:.1}s with score {}",
                    frame as f64 * FRAME_MS / 1000.0,
                    game.state.score
                );
                break;
            }
        }
        game.state.score
    }

    /// No bug near the tile above the player, counting what arrives soon
    fn next_lane_clear(state: &GameState) -> bool {
        let map = &state.map;
        let target_y = state.player.pos.y - map.tile_height;
        let x = state.player.pos.x;
        state
            .enemies
            .iter()
            .filter(|e| (e.pos.y - target_y).abs() < 1.0 || (e.pos.y - state.player.pos.y).abs() < 1.0)
            .all(|e| {
                let ahead = x - e.pos.x;
                // Bugs only move right: behind us is safe once they pass
                !(-map.tile_width..=map.tile_width * 2.5).contains(&ahead)
            })
    }
}
