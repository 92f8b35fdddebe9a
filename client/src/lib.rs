//! # client
//!
//! Leptos + WASM frontend for the EV battery passport demo.
//!
//! This crate contains the app shell, the landing and passport pages, the
//! header wallet connector, and the pure layout helpers the components render
//! from. Shared record types come from the `passport` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
