//! Pocket Arcade entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use pocket_arcade::audio::AudioManager;
    use pocket_arcade::consts::*;
    use pocket_arcade::renderer::CanvasSurface;
    use pocket_arcade::{Manager, Tuning, View};

    const MENU_ID: &str = "buttons-wrapper";
    const CANVAS_ID: &str = "canvas";
    const BACK_ID: &str = "back-button";

    /// App instance holding all state
    struct App {
        manager: Manager<CanvasSurface>,
        audio: AudioManager,
        document: Document,
        last_time: f64,
        shown: Option<View>,
    }

    impl App {
        fn update(&mut self, dt: f32) {
            self.manager.frame(dt);
            for event in self.manager.drain_events() {
                self.audio.play_event(event);
            }
        }

        /// Sync menu/canvas visibility with the manager's view
        fn sync_view(&mut self) {
            let view = self.manager.view();
            if self.shown == Some(view) {
                return;
            }
            let playing = view == View::Playing;
            set_display(&self.document, MENU_ID, !playing);
            set_display(&self.document, CANVAS_ID, playing);
            set_display(&self.document, BACK_ID, playing);
            self.shown = Some(view);
        }
    }

    fn set_display(document: &Document, id: &str, visible: bool) {
        let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("Missing element #{}", id);
            return;
        };
        let value = if visible { "flex" } else { "none" };
        let _ = el.style().set_property("display", value);
    }

    fn load_tuning(document: &Document) -> Tuning {
        match document
            .get_element_by_id(Tuning::ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(json) if !json.trim().is_empty() => Tuning::from_json_or_default(&json),
            _ => Tuning::default(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pocket Arcade starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        if canvas.width() == 0 || canvas.height() == 0 {
            canvas.set_width(CANVAS_WIDTH);
            canvas.set_height(CANVAS_HEIGHT);
        }

        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::error!("2D canvas context unavailable");
            return;
        };

        let tuning = load_tuning(&document);
        let seed = tuning.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let audio = AudioManager::new(&tuning.audio);
        let app = Rc::new(RefCell::new(App {
            manager: Manager::new(surface, tuning, seed),
            audio,
            document: document.clone(),
            last_time: 0.0,
            shown: None,
        }));

        log::info!("Arcade initialized with seed: {}", seed);

        setup_menu(&document, app.clone());
        setup_keyboard(app.clone());
        app.borrow_mut().sync_view();

        request_animation_frame(app);
    }

    fn setup_menu(document: &Document, app: Rc<RefCell<App>>) {
        // One listener on the wrapper; the clicked button's id names the game
        if let Some(menu) = document.get_element_by_id(MENU_ID) {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                else {
                    return;
                };
                if target.tag_name() != "BUTTON" {
                    return;
                }
                let mut a = app.borrow_mut();
                a.audio.resume();
                if a.manager.start_game(&target.id()) {
                    a.last_time = 0.0;
                    a.sync_view();
                }
            });
            let _ = menu.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id(BACK_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.manager.back();
                a.sync_view();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                // Keep arrow keys from scrolling the page mid-game
                if a.manager.view() == View::Playing && key.starts_with("Arrow") {
                    event.prevent_default();
                }
                a.manager.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().manager.key_up(&event.key());
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            app_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn app_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                FIRST_FRAME_DT
            };
            a.last_time = time;

            a.update(dt);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pocket_arcade::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use pocket_arcade::renderer::RecordingSurface;
    use pocket_arcade::{GameKind, Lifecycle, Manager, Tuning};

    /// Simulated frame length for the headless run
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up on a round after this many simulated seconds
    const MAX_SECONDS: u32 = 120;

    env_logger::init();
    log::info!("Pocket Arcade (native) starting...");
    log::info!("Running headless demo rounds - use `trunk serve` to play in the browser");

    let tuning = Tuning::default();
    let seed = tuning.seed.unwrap_or(42);
    let surface = RecordingSurface::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
    let mut manager = Manager::new(surface.clone(), tuning, seed);

    for kind in GameKind::ALL {
        manager.start_game(kind.id());
        let mut events = 0;
        let mut frames = 0;
        while manager.current_lifecycle() == Some(Lifecycle::Running)
            && frames < MAX_SECONDS * 60
        {
            manager.frame(FRAME_DT);
            events += manager.drain_events().len();
            frames += 1;
        }

        match manager.result() {
            Some(result) => log::info!(
                "{}: {:?} after {} frames, {} events",
                kind.id(),
                result,
                frames,
                events
            ),
            None => log::info!("{}: no result after {} frames", kind.id(), frames),
        }
        log::info!("{}: {} draw calls recorded", kind.id(), surface.commands().len());
        surface.reset();
        manager.back();
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
