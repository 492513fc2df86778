//! Safe Harbour admin dashboard.
//!
//! ARCHITECTURE
//! ============
//! A Leptos application rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`). `net` talks to the REST backend, `state` holds the
//! client-side stores, `util` carries the shared call/validation helpers, and
//! `pages`/`components` render the screens.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only fails if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
