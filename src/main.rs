//! Heart Drop entry point
//!
//! Wires browser events to the drag controller. The native build plays a
//! scripted session instead, logging every effect.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::{Interval, Timeout};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, EventTarget, MouseEvent, TouchEvent};

    use heart_drop::backdrop;
    use heart_drop::consts::BACKDROP_HEARTS;
    use heart_drop::platform::dom::{self, Elements};
    use heart_drop::platform::{self, confetti, input};
    use heart_drop::sim::{DragController, Effect};
    use heart_drop::GameConfig;

    /// Page session: controller plus the handles it needs
    struct App {
        ctrl: DragController,
        els: Elements,
        /// Recurring celebration; dropping it stops the bursts
        burst: Option<Interval>,
    }

    type Shared = Rc<RefCell<App>>;

    /// Apply controller effects, scheduling timers back into the controller
    fn dispatch(app: &Shared, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { delay_ms, timer } => {
                    let app = app.clone();
                    Timeout::new(delay_ms, move || {
                        let effects = app.borrow_mut().ctrl.on_timer(timer);
                        dispatch(&app, effects);
                    })
                    .forget();
                }
                Effect::Burst(params) => confetti::fire(&params),
                Effect::StartBurstLoop {
                    interval_ms,
                    params,
                } => {
                    let interval = Interval::new(interval_ms, move || confetti::fire(&params));
                    app.borrow_mut().burst = Some(interval);
                    log::info!("Celebration bursts every {}ms", interval_ms);
                }
                other => app.borrow().els.apply(&other),
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Heart Drop starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let els = Elements::find(&document)?;

        let mut rng = Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
        dom::spawn_backdrop(&document, &backdrop::layout_hearts(&mut rng, BACKDROP_HEARTS))?;

        log::info!(
            "Controller ready: {} confirmations needed, seed {}",
            config.confirmations_required(),
            seed
        );
        let app = Rc::new(RefCell::new(App {
            ctrl: DragController::new(config, seed),
            els,
            burst: None,
        }));

        setup_mouse_handlers(&app, &document)?;
        setup_touch_handlers(&app, &document)?;
        setup_teardown(&app, &window)?;

        log::info!("Heart Drop running!");
        Ok(())
    }

    fn setup_mouse_handlers(app: &Shared, document: &web_sys::Document) -> Result<(), JsValue> {
        let heart: EventTarget = app.borrow().els.heart.clone().into();

        // Mouse down on the heart
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                let Some(window) = web_sys::window() else {
                    return;
                };
                let effects = {
                    let mut a = app.borrow_mut();
                    let origin = a.els.heart_origin(&window);
                    a.ctrl.begin_drag(input::mouse_sample(&event), origin)
                };
                dispatch(&app, effects);
            });
            heart.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move anywhere on the page
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let effects = {
                    let mut a = app.borrow_mut();
                    if !a.ctrl.is_dragging() {
                        return;
                    }
                    let trash = a.els.trash_rect();
                    a.ctrl.update_drag(input::mouse_sample(&event), trash)
                };
                dispatch(&app, effects);
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up anywhere on the page
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let effects = {
                    let mut a = app.borrow_mut();
                    if !a.ctrl.is_dragging() {
                        return;
                    }
                    let geometry = a.els.drop_geometry();
                    a.ctrl.end_drag(input::mouse_sample(&event), &geometry)
                };
                dispatch(&app, effects);
            });
            document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_touch_handlers(app: &Shared, document: &web_sys::Document) -> Result<(), JsValue> {
        let heart: EventTarget = app.borrow().els.heart.clone().into();
        // Non-passive so preventDefault can stop the page scrolling
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        // Touch start on the heart
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Some(sample) = input::touch_start_sample(&event) else {
                    return;
                };
                let effects = {
                    let mut a = app.borrow_mut();
                    let origin = a.els.heart_origin(&window);
                    a.ctrl.begin_drag(sample, origin)
                };
                dispatch(&app, effects);
            });
            heart.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Touch move: only the tracked finger counts
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let effects = {
                    let mut a = app.borrow_mut();
                    if !a.ctrl.is_dragging() {
                        return;
                    }
                    event.prevent_default();
                    let Some(sample) =
                        input::tracked_touch(&event.touches(), a.ctrl.tracked_pointer())
                    else {
                        return;
                    };
                    let trash = a.els.trash_rect();
                    a.ctrl.update_drag(sample, trash)
                };
                dispatch(&app, effects);
            });
            document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Touch end / cancel: the lifted finger is in changedTouches
        for kind in ["touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let effects = {
                    let mut a = app.borrow_mut();
                    let Some(sample) =
                        input::tracked_touch(&event.changed_touches(), a.ctrl.tracked_pointer())
                    else {
                        return;
                    };
                    event.prevent_default();
                    let geometry = a.els.drop_geometry();
                    a.ctrl.end_drag(sample, &geometry)
                };
                dispatch(&app, effects);
            });
            document.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        Ok(())
    }

    /// Stop the celebration when the page is unloaded for good
    fn setup_teardown(app: &Shared, window: &web_sys::Window) -> Result<(), JsValue> {
        let app = app.clone();
        let closure =
            Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
                if !platform::stops_celebration(event.persisted()) {
                    log::debug!("Page cached, celebration kept");
                    return;
                }
                if app.borrow_mut().burst.take().is_some() {
                    log::info!("Celebration stopped (page unloaded)");
                }
            });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Heart Drop (native) starting...");
    log::info!("The game runs in the browser - build for wasm32 and serve with `trunk serve`");
    demo::play();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session against the controller, with a fake clock
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;

    use heart_drop::GameConfig;
    use heart_drop::sim::{DragController, DropGeometry, Effect, Phase, PointerSample, Rect};

    const HEART: Vec2 = Vec2::new(200.0, 180.0);
    const LOVE: Rect = Rect {
        left: 40.0,
        top: 420.0,
        width: 120.0,
        height: 120.0,
    };
    const TRASH: Rect = Rect {
        left: 240.0,
        top: 420.0,
        width: 120.0,
        height: 120.0,
    };

    struct Session {
        ctrl: DragController,
        now: u32,
        timers: Vec<(u32, heart_drop::sim::Timer)>,
    }

    impl Session {
        fn run(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::Schedule { delay_ms, timer } => {
                        self.timers.push((self.now + delay_ms, timer))
                    }
                    Effect::Feedback { text, .. } => log::info!("[{:>5}ms] \"{}\"", self.now, text),
                    other => log::debug!("[{:>5}ms] {:?}", self.now, other),
                }
            }
        }

        fn wait(&mut self, ms: u32) {
            let until = self.now + ms;
            loop {
                let next = self
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= until)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(i, _)| i);
                let Some(i) = next else {
                    break;
                };
                let (due, timer) = self.timers.remove(i);
                self.now = due;
                let effects = self.ctrl.on_timer(timer);
                self.run(effects);
            }
            self.now = until;
        }

        /// Drag from the heart's spot through `path`, releasing at the last point
        fn drag(&mut self, path: &[Vec2]) {
            let effects = self
                .ctrl
                .begin_drag(PointerSample::mouse(HEART.x, HEART.y), HEART);
            self.run(effects);
            let mut last = HEART;
            for &p in path {
                let trash = TRASH.translated(self.ctrl.trash_offset());
                let effects = self.ctrl.update_drag(PointerSample::mouse(p.x, p.y), trash);
                self.run(effects);
                self.wait(16);
                last = p;
            }
            // Heart centre sits where the pointer is, since it started centred
            let geometry = DropGeometry {
                heart: Rect::from_center(last, 80.0, 80.0),
                love: LOVE,
                trash: TRASH.translated(self.ctrl.trash_offset()),
            };
            let effects = self.ctrl.end_drag(PointerSample::mouse(last.x, last.y), &geometry);
            self.run(effects);
            self.wait(700);
        }
    }

    pub fn play() {
        let mut s = Session {
            ctrl: DragController::new(GameConfig::load(), 2024),
            now: 0,
            timers: Vec::new(),
        };

        log::info!("Reaching for the trash can...");
        s.drag(&[Vec2::new(260.0, 300.0), TRASH.center()]);

        log::info!("Dropping straight on it...");
        let target = TRASH.translated(s.ctrl.trash_offset()).center();
        s.drag(&[target]);

        log::info!("Going for love...");
        while s.ctrl.phase() != Phase::Won {
            s.drag(&[Vec2::new(150.0, 300.0), LOVE.center()]);
        }
        log::info!(
            "Won after {} confirmations at {}ms",
            s.ctrl.confirmations(),
            s.now
        );
    }
}
