//! # client
//!
//! Leptos + WASM frontend for the portfolio page.
//!
//! The crate renders a single page and drives its three behaviors:
//! reveal-on-scroll for page sections, a persisted light/dark theme, and
//! smooth in-page navigation with a collapsible mobile menu. Rendering runs on
//! the server (`ssr`) and is hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, opt in to reveal styling, and
/// hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    util::dom::mark_scripted();
    leptos::mount::hydrate_body(app::App);
}
