pub mod runner;
pub mod storage;

pub use runner::GameRunner;
pub use storage::{browser_store, LocalStorageStore};

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - the wasm-bindgen exports (game_init, game_tick, key handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use rockbound_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// rockbound_web::export_game!(MyGame, "my-game");
/// // or, when the game needs arguments:
/// rockbound_web::export_game!(MyGame, "my-game", MyGame::new(rockbound_web::browser_store()));
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `rockbound_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
/// - `$ctor` (optional): expression building the game; defaults to `<$game_type>::new()`
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        $crate::export_game!($game_type, $game_name, <$game_type>::new());
    };

    ($game_type:ty, $game_name:literal, $ctor:expr) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game: $game_type = $ctor;
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(rockbound_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(rockbound_engine::InputEvent::KeyUp { key_code }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        /// Player-facing messages raised since the last call.
        #[wasm_bindgen]
        pub fn game_take_messages() -> js_sys::Array {
            with_runner(|r| {
                r.take_messages()
                    .into_iter()
                    .map(|m| wasm_bindgen::JsValue::from_str(&m))
                    .collect()
            })
        }

        #[wasm_bindgen]
        pub fn get_active_scene() -> String {
            with_runner(|r| r.active_scene())
        }

        // ---- Camera accessors ----

        #[wasm_bindgen]
        pub fn get_camera_x() -> f32 {
            with_runner(|r| r.camera_x())
        }

        #[wasm_bindgen]
        pub fn get_camera_y() -> f32 {
            with_runner(|r| r.camera_y())
        }

        #[wasm_bindgen]
        pub fn get_camera_zoom() -> f32 {
            with_runner(|r| r.camera_zoom())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width())
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height())
        }

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }
    };
}
