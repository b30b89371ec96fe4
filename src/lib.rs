//! Scroll and click behaviour for a static landing page: mobile menu, navbar
//! shading, smooth in-page anchors, a scroll-to-top button, fade-in reveals
//! and the active nav link for the section in view.
//!
//! The behaviour lives in plain functions over the [`page::Page`] trait; the
//! [`web`] module binds them to the real DOM.

use log::info;
use wasm_bindgen::prelude::*;

pub mod anchor;
pub mod config;
pub mod enhancer;
pub mod menu;
pub mod page;
pub mod reveal;
pub mod scroll_ui;
pub mod sections;
pub mod web;

#[cfg(test)]
mod testing;

pub use config::{Config, Markers};
pub use enhancer::Enhancer;
pub use page::{Elements, Page, Rect};

fn setup_logging(config: &Config) {
    let level = config.log_level();
    // Errors only when a logger is already installed, e.g. on re-initialization
    let _ = console_log::init_with_level(level);
    log::set_max_level(level.to_level_filter());
}

/// Runs on module load with the default configuration.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = Config::default();
    setup_logging(&config);
    info!("Starting landing enhancer");
    web::attach_when_ready(config)
}

/// Re-runs initialization with a (partial) options object, replacing the
/// listeners bound by an earlier call.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(options: JsValue) -> Result<(), JsValue> {
    let config: Config = if options.is_undefined() || options.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    setup_logging(&config);
    web::attach_when_ready(config)
}

/// Removes every listener bound by the enhancer. Markers already set stay.
#[wasm_bindgen]
pub fn teardown() {
    web::detach();
}
