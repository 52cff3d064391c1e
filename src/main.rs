//! Runway Flap entry point
//!
//! The web build drives a `Session` from requestAnimationFrame and draws it
//! with WebGPU. The native build runs a headless autopilot flight.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent, TouchEvent};

    use runway_flap::input::{Command, InputSource, command_for_key};
    use runway_flap::renderer::{RenderState, build_scene};
    use runway_flap::sim::GameEvent;
    use runway_flap::{Hud, Session, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn update(&mut self, now: f64) {
            for event in self.session.frame(now) {
                match event {
                    GameEvent::SessionEnded { score } => {
                        log::info!("Flight ended with score {}", score)
                    }
                    GameEvent::Hit { hearts } => log::debug!("Hit, {} hearts left", hearts),
                    _ => {}
                }
            }
        }

        fn render(&mut self) {
            let vertices = build_scene(self.session.state(), &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = Hud::from_state(self.session.state());

            if let Some(el) = document.get_element_by_id("hud-hearts") {
                el.set_text_content(Some(&hud.hearts));
            }
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&format!("{} fps", self.session.fps())));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("overlay") {
                match &hud.overlay {
                    Some(overlay) => {
                        let _ = el.set_attribute("class", "");
                        if let Some(title) = document.get_element_by_id("overlay-title") {
                            title.set_text_content(Some(overlay.title));
                        }
                        if let Some(text) = document.get_element_by_id("overlay-text") {
                            text.set_text_content(Some(overlay.instruction));
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }

        /// Preference hotkeys; returns true if the key was consumed
        fn toggle_setting(&mut self, code: &str) -> bool {
            match code {
                "KeyF" => self.settings.show_fps = !self.settings.show_fps,
                "KeyM" => self.settings.reduced_motion = !self.settings.reduced_motion,
                "KeyN" => self.settings.day_night_cycle = !self.settings.day_night_cycle,
                _ => return false,
            }
            self.settings.save();
            true
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Runway Flap starting...");

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

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, Tuning::default(), now_ms()),
            settings: Settings::load(),
            render_state: None,
        }));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
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

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Runway Flap running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer (mouse, pen, touch on modern browsers)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                game.borrow_mut()
                    .session
                    .command(Command::Flap, InputSource::Pointer, now_ms());
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start for browsers without pointer events
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut()
                    .session
                    .command(Command::Flap, InputSource::Pointer, now_ms());
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                let mut g = game.borrow_mut();
                if g.toggle_setting(&code) {
                    return;
                }
                if let Some(command) = command_for_key(&code) {
                    event.prevent_default();
                    g.session.command(command, InputSource::Keyboard, now_ms());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
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
        {
            let mut g = game.borrow_mut();
            g.update(now_ms());
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.stop_propagation();
                game.borrow_mut()
                    .session
                    .command(Command::Restart, InputSource::Pointer, now_ms());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use runway_flap::input::{Command, InputSource};
    use runway_flap::sim::GameEvent;
    use runway_flap::{Session, Tuning};

    const DEFAULT_SEED: u64 = 0x5EED;
    const DEFAULT_FRAMES: u32 = 60 * 60;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Runway Flap (native) starting...");
    log::info!("Native mode is a headless autopilot run - use `trunk serve` to play");

    let env_or = |key: &str| std::env::var(key).ok().and_then(|v| v.parse::<u64>().ok());
    let seed = env_or("RUNWAY_FLAP_SEED").unwrap_or(DEFAULT_SEED);
    let frames = env_or("RUNWAY_FLAP_FRAMES")
        .map(|f| f.min(u32::MAX as u64) as u32)
        .unwrap_or(DEFAULT_FRAMES);

    let tuning = match std::env::var("RUNWAY_FLAP_TUNING") {
        Ok(path) => match Tuning::load_file(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                return;
            }
        },
        Err(_) => Tuning::default(),
    };
    if let Err(e) = tuning.validate() {
        log::error!("Invalid tuning: {}", e);
        return;
    }

    let mut session = Session::new(seed, tuning, 0.0);
    session.command(Command::ToggleAutopilot, InputSource::Keyboard, 0.0);

    let mut best = 0;
    let mut flights = 0;
    for frame in 0..frames {
        let now = frame as f64 * FRAME_MS;
        for event in session.frame(now) {
            match event {
                GameEvent::Scored { score } => best = best.max(score),
                GameEvent::SessionEnded { score } => {
                    flights += 1;
                    log::info!("Flight {} ended at frame {} with score {}", flights, frame, score);
                }
                GameEvent::Healed { hearts } => log::debug!("Healed to {} hearts", hearts),
                _ => {}
            }
        }
    }

    let state = session.state();
    println!(
        "seed {}: {} frames, best score {}, current score {}, hearts {}, flights ended {}",
        session.seed(),
        frames,
        best,
        state.score,
        state.hearts,
        flights
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
