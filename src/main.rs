//! Shark Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent};

    use shark_catch::platform::key_from_dom;
    use shark_catch::renderer::{GlyphLayer, RenderState, build_scene};
    use shark_catch::sim::{GameEvent, GameState, InputState, autopilot, tick};
    use shark_catch::{GameError, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        settings: Settings,
        input: InputState,
        render_state: Option<RenderState>,
        glyphs: Option<GlyphLayer>,
        /// A frame callback is scheduled
        loop_active: bool,
        /// Demo mode: the autopilot holds the keys
        idle_mode: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed, &tuning),
                tuning,
                settings,
                input: InputState::new(),
                render_state: None,
                glyphs: None,
                loop_active: false,
                idle_mode: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation frame
        fn update(&mut self, time: f64) {
            if self.idle_mode {
                autopilot(&self.state, &self.tuning, &mut self.input);
            }

            for event in tick(&mut self.state, &self.input, &self.tuning) {
                match event {
                    GameEvent::Missed { kind } => {
                        log::debug!("Missed {} ({} total)", kind.name(), self.state.missed)
                    }
                    GameEvent::GameOver { missed } => {
                        log::info!("Game over: {} good objects missed", missed)
                    }
                    _ => {}
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.state, &self.settings, &self.tuning);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            if let Some(ref glyphs) = self.glyphs {
                if let Err(e) = glyphs.draw(&self.state, &self.settings) {
                    log::warn!("Glyph overlay error: {}", e);
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("missed") {
                el.set_text_content(Some(&self.state.missed.to_string()));
            }

            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                    let _ = el.class_list().remove_1("hidden");
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.is_running() {
                    let _ = el.class_list().add_1("hidden");
                } else {
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                    let _ = el.class_list().remove_1("hidden");
                }
            }
        }

        /// Reset game state for restart
        fn restart(&mut self, seed: u64) {
            self.state.restart(seed, &self.tuning);
            self.input.clear();
        }
    }

    fn element(document: &Document, id: &'static str) -> Result<Element, GameError> {
        document
            .get_element_by_id(id)
            .ok_or(GameError::MissingElement(id))
    }

    fn canvas_element(document: &Document, id: &'static str) -> Result<HtmlCanvasElement, GameError> {
        element(document, id)?
            .dyn_into()
            .map_err(|_| GameError::Js(format!("#{} is not a canvas", id)))
    }

    pub async fn run() -> Result<(), GameError> {
        log::info!("Shark Catch starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Js("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Js("no document".to_string()))?;

        // Fail early if the page is missing pieces the loop writes to
        for id in ["score", "missed", "game-over", "final-score", "restart-btn"] {
            element(&document, id)?;
        }

        let tuning = Tuning::load();
        let settings = Settings::load();

        let canvas = canvas_element(&document, "canvas")?;
        let glyph_canvas = canvas_element(&document, "glyphs")?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let arena = (tuning.arena_width, tuning.arena_height);
        let game = Rc::new(RefCell::new(Game::new(seed, tuning, settings)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU (WebGL fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::Graphics(format!("surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::Graphics(format!("adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, arena).await?;
        // Same backing size as the surface so both letterbox identically
        let glyphs = GlyphLayer::new(&glyph_canvas, (width, height), arena)?;
        {
            let mut g = game.borrow_mut();
            g.render_state = Some(render_state);
            g.glyphs = Some(glyphs);
        }

        setup_input_handlers(game.clone())?;
        setup_restart_button(&document, game.clone())?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        start_loop(game);
        log::info!("Shark Catch running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), GameError> {
        let window = web_sys::window().ok_or_else(|| GameError::Js("no window".to_string()))?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(key) = key_from_dom(&event.key()) {
                    event.prevent_default();
                    g.input.press(key);
                    return;
                }
                match event.key().as_str() {
                    "f" | "F" => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.settings.save();
                    }
                    "m" | "M" => {
                        g.settings.reduced_motion = !g.settings.reduced_motion;
                        g.settings.save();
                    }
                    "i" | "I" => {
                        g.idle_mode = !g.idle_mode;
                        g.input.clear();
                        log::info!("Idle mode: {}", g.idle_mode);
                    }
                    _ => {}
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|e| GameError::Js(format!("{:?}", e)))?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_from_dom(&event.key()) {
                    game.borrow_mut().input.release(key);
                }
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(|e| GameError::Js(format!("{:?}", e)))?;
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.clear();
            });
            window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                .map_err(|e| GameError::Js(format!("{:?}", e)))?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), GameError> {
        let btn = element(document, "restart-btn")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let seed = js_sys::Date::now() as u64;
            game.borrow_mut().restart(seed);
            log::info!("Game restarted with seed: {}", seed);
            start_loop(game.clone());
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Js(format!("{:?}", e)))?;
        closure.forget();
        Ok(())
    }

    /// Schedule frames unless a loop is already running
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();

            g.update(time);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }

            // Halt until restart
            if !g.state.is_running() {
                g.loop_active = false;
            }
            g.loop_active
        };

        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    if let Err(e) = wasm_game::run().await {
        log::error!("Shark Catch failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shark Catch (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the web version");

    if let Err(e) = headless::run(std::env::args().skip(1).collect()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the autopilot plays a seeded run and the outcome is logged
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use shark_catch::consts::FALLBACK_SEED;
    use shark_catch::sim::{GameEvent, GameState, InputState, autopilot, tick};
    use shark_catch::{GameError, Tuning};

    /// Ten minutes at 60 Hz
    const DEFAULT_FRAMES: u64 = 36_000;

    /// Usage: `shark-catch [seed] [frames] [tuning.json]`
    pub fn run(args: Vec<String>) -> Result<(), GameError> {
        let seed = match args.first() {
            Some(s) => s
                .parse()
                .map_err(|_| GameError::InvalidArgument(format!("seed must be a number, got {s:?}")))?,
            None => FALLBACK_SEED,
        };
        let frames = match args.get(1) {
            Some(s) => s
                .parse()
                .map_err(|_| GameError::InvalidArgument(format!("frames must be a number, got {s:?}")))?,
            None => DEFAULT_FRAMES,
        };
        let tuning = match args.get(2) {
            Some(path) => Tuning::from_file(path)?,
            None => Tuning::default(),
        };

        log::info!("Seed {}, up to {} frames", seed, frames);

        let mut state = GameState::new(seed, &tuning);
        let mut input = InputState::new();
        let mut caught = 0u32;

        while state.frame < frames {
            autopilot(&state, &tuning, &mut input);
            let events = tick(&mut state, &input, &tuning);
            caught += events
                .iter()
                .filter(|e| matches!(e, GameEvent::Caught { .. }))
                .count() as u32;
            if !state.is_running() {
                break;
            }
        }

        log::info!(
            "Finished after {} frames: score {}, caught {}, missed {}, spawned {}, {:?}",
            state.frame,
            state.score,
            caught,
            state.missed,
            state.objects_spawned,
            state.phase
        );
        println!(
            "score={} caught={} missed={} frames={}",
            state.score, caught, state.missed, state.frame
        );
        Ok(())
    }
}
