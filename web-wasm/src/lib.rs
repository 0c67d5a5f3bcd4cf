//! Game Review Explorer Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod logging;

use wasm_bindgen::prelude::*;

/// 起動時の初期化はここで一度だけ行う
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    log::info!("game review explorer started");
    leptos::mount::mount_to_body(app::App);
}
