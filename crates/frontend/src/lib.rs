pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Точка входа панели подключений
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!(
        "connectors dashboard starting, api base: {}",
        shared::api_utils::api_base()
    );
    leptos::mount::mount_to_body(app::App);
}
