pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::{load_config, ConfigSource, CONFIG_ELEMENT_ID};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, source) = load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    match source {
        ConfigSource::Embedded => log::info!("config: using embedded defaults"),
        ConfigSource::Page => log::info!("config: loaded from #{}", CONFIG_ELEMENT_ID),
        ConfigSource::InvalidPage(e) => {
            log::warn!("config: page override ignored, using defaults: {}", e)
        }
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
