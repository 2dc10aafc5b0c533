//! # client
//!
//! Leptos + WASM frontend for the job portal.
//!
//! This crate contains pages, components, application state, and the
//! `gloo-net` transport. Validation, payload shaping, error normalization and
//! the login/registration flows live in the `accounts` crate; this crate only
//! wires them to the DOM, `localStorage`, and the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
