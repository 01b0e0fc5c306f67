//! # auralis-client
//!
//! Leptos + WASM frontend for the Auralis meeting workspace. Covers the
//! auth surface (login, signup, Google hand-off), the session bootstrap
//! that decides between login and dashboard on every page load, and the
//! authenticated dashboard and settings pages, all on top of a
//! bearer-token JSON API client.
//!
//! Browser specifics (localStorage, `window.location`, HTTP) sit behind
//! the `SessionStore` and `Navigator` traits and the `hydrate` feature,
//! so the session and API policies test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point: hydrate the server-rendered DOM in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
