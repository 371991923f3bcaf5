//! Dash Hound entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dash_hound::consts::*;
    use dash_hound::input::{ArrowKey, InputState, Swipe};
    use dash_hound::render::{Assets, CanvasRenderer};
    use dash_hound::sim::{GamePhase, GameState, tick};
    use dash_hound::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: InputState,
        last_time: f64,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dash Hound starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(GAME_WIDTH as u32);
        canvas.set_height(GAME_HEIGHT as u32);

        let assets = Assets::load(&document).expect("missing game art");
        let renderer = CanvasRenderer::new(&canvas, assets).expect("no 2d context");
        let tuning = Tuning::load(&document);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, tuning.clone()),
            renderer,
            input: InputState::new(tuning.swipe_threshold),
            last_time: 0.0,
        }));

        log::info!("round started (seed {seed})");

        setup_keyboard(game.clone());
        setup_touch(game.clone());
        setup_fullscreen_button(&document, canvas);

        schedule_frame(game);
    }

    /// Begin the round after game over. The spawn timer, RNG and player
    /// velocity deliberately carry over (see `GameState::restart`).
    fn restart(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.state.restart();
            g.last_time = 0.0;
        }
        schedule_frame(game);
    }

    /// Schedule the next animation frame. The closure is single-shot, so
    /// each frame reclaims its own callback; game over simply stops
    /// scheduling and a restart re-enters the loop.
    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once_into_js(move |time: f64| frame(game, time));
        window
            .request_animation_frame(closure.unchecked_ref())
            .expect("requestAnimationFrame failed");
    }

    fn frame(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();

            // First frame after a (re)start runs with dt 0
            let dt = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                0.0
            };
            g.last_time = time;

            let input = g.input.snapshot();
            let g = &mut *g;
            tick(&mut g.state, &input, dt);
            if let Err(err) = g.renderer.render(&g.state) {
                log::error!("render failed: {err:?}");
            }
            g.state.phase != GamePhase::GameOver
        };

        if keep_running {
            schedule_frame(game);
        } else {
            log::info!("waiting for restart");
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if let Some(arrow) = ArrowKey::from_key_name(&key) {
                    game.borrow_mut().input.key_down(arrow);
                } else if key == "Enter" && game.borrow().state.phase == GamePhase::GameOver {
                    restart(game.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(arrow) = ArrowKey::from_key_name(&event.key()) {
                    game.borrow_mut().input.key_up(arrow);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Touch start: anchor the gesture
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    game.borrow_mut().input.touch_start(touch.page_y() as f32);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move: latch swipes; a fresh swipe-down restarts when game
        // over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let mut g = game.borrow_mut();
                let swipe = g.input.touch_move(touch.page_y() as f32);
                let game_over = g.state.phase == GamePhase::GameOver;
                drop(g);
                if swipe == Some(Swipe::Down) && game_over {
                    restart(game.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: clear the gesture
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().input.touch_end();
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_fullscreen_button(document: &Document, canvas: HtmlCanvasElement) {
        let Some(button) = document.get_element_by_id("fullscreenButton") else {
            log::warn!("no fullscreen button in host page");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");
            if document.fullscreen_element().is_none() {
                if let Err(err) = canvas.request_fullscreen() {
                    let _ = window.alert_with_message(&format!(
                        "Error, can't enable fullscreen mode: {err:?}"
                    ));
                }
            } else {
                document.exit_fullscreen();
            }
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dash_hound::sim::{GamePhase, GameState, TickInput, tick};
    use dash_hound::tuning::Tuning;

    env_logger::init();
    log::info!("Dash Hound (native) starting...");
    log::info!("Native mode runs a headless demo round - run with `trunk serve` for the web version");

    let mut state = GameState::new(0xD095, Tuning::default());
    let dt = 1000.0 / 60.0;
    let mut frames: u32 = 0;

    // Scripted round: jump periodically, otherwise just run. Capped in
    // case the script happens to dodge everything.
    while state.phase == GamePhase::Running && frames < 36_000 {
        let input = TickInput {
            jump: frames % 90 < 10,
            ..Default::default()
        };
        tick(&mut state, &input, dt);
        frames += 1;
    }

    log::info!(
        "demo round ended after {frames} frames with score {}",
        state.score
    );
}
