pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::load_config;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, notes) = load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.log_level());
    console_error_panic_hook::set_once();
    for note in notes {
        log::info!("{}", note);
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
