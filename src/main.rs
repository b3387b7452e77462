//! Food Chain entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use food_chain::Settings;
    use food_chain::platform::KeyState;
    use food_chain::renderer::{CanvasSurface, DrawSurface};
    use food_chain::sim::{GameEvent, GameState, TickStatus, round, tick, toggle_pause};
    use food_chain::theme;

    struct Game {
        state: GameState,
        keys: KeyState,
        surface: CanvasSurface,
        /// A requestAnimationFrame callback is queued
        frame_pending: bool,
        last_theme: Option<usize>,
    }

    impl Game {
        fn frame(&mut self) -> TickStatus {
            let input = self.keys.input();
            let status = tick(&mut self.state, &input, &mut self.surface);

            for event in self.state.drain_events() {
                show_outcome(&event, self.state.best_score);
            }
            self.update_background();
            status
        }

        fn update_background(&mut self) {
            if self.last_theme == Some(self.state.theme_index) {
                return;
            }
            self.last_theme = Some(self.state.theme_index);

            let container = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(".game-container").ok().flatten())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(container) = container {
                let _ = container
                    .style()
                    .set_property("background", theme::background(self.state.theme_index));
            }
        }
    }

    /// Show the terminal overlay (non-blocking replacement for alert())
    fn show_outcome(event: &GameEvent, best_score: u64) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("outcome") {
            el.set_text_content(Some(&event.message()));
            let _ = el.set_attribute("class", "");
        }
        if let Some(el) = document.get_element_by_id("best-score") {
            el.set_text_content(Some(&best_score.to_string()));
        }
    }

    fn hide_outcome() {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("outcome"))
        {
            let _ = el.set_attribute("class", "hidden");
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Food Chain starting...");

        let settings = Settings::load();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(settings.width as u32);
        canvas.set_height(settings.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let state = GameState::new(seed, settings.playfield());
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            keys: KeyState::default(),
            surface: CanvasSurface::new(
                ctx,
                settings.width as f64,
                settings.height as f64,
                settings.show_labels,
            ),
            frame_pending: false,
            last_theme: None,
        }));
        game.borrow_mut().update_background();

        setup_input(game.clone(), &window)?;
        setup_buttons(game, &document)?;

        log::info!("Food Chain ready");
        Ok(())
    }

    fn setup_input(game: Rc<RefCell<Game>>, window: &web_sys::Window) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(game: Rc<RefCell<Game>>, document: &web_sys::Document) -> Result<(), JsValue> {
        let buttons: [(&str, fn(&Rc<RefCell<Game>>)); 3] = [
            ("startButton", on_start),
            ("pauseButton", on_pause),
            ("resetButton", on_reset),
        ];

        for (id, handler) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} not found", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                handler(&game);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn on_start(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            round::start(&mut g.state);
            g.keys.clear();
        }
        hide_outcome();
        request_animation_frame(game.clone());
    }

    fn on_pause(game: &Rc<RefCell<Game>>) {
        let paused = toggle_pause(&mut game.borrow_mut().state);
        if !paused {
            request_animation_frame(game.clone());
        }
    }

    fn on_reset(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        round::reset(&mut g.state);
        g.keys.clear();
        g.surface.clear();
        g.update_background();
        drop(g);
        hide_outcome();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.frame_pending || !g.state.is_ticking() {
                return;
            }
            g.frame_pending = true;
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let status = {
            let mut g = game.borrow_mut();
            g.frame_pending = false;
            g.frame()
        };

        if status == TickStatus::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Upper bound for a headless run (five minutes at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_FRAMES: u64 = 5 * 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use food_chain::Settings;
    use food_chain::platform::autopilot;
    use food_chain::renderer::NullSurface;
    use food_chain::sim::{GameState, TickStatus, round, tick};

    env_logger::init();
    log::info!("Food Chain (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in the browser");

    let settings = Settings::load();
    let clock_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let seed = settings.seed_or(clock_seed);

    let mut state = GameState::new(seed, settings.playfield());
    round::start(&mut state);

    let mut surface = NullSurface;
    while state.frame < HEADLESS_MAX_FRAMES {
        let input = autopilot::steer(&state);
        if tick(&mut state, &input, &mut surface) != TickStatus::Continue {
            break;
        }
    }

    let events = state.drain_events();
    match events.last() {
        Some(event) => println!("{}", event.message()),
        None => println!(
            "Demo stopped after {} frames in round {} with score {}",
            state.frame, state.round, state.score
        ),
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => log::debug!("Final world:\n{}", json),
        Err(e) => log::warn!("Could not serialize final world: {}", e),
    }
}
