//! # client
//!
//! Leptos + WASM frontend for the tree evaluation page.
//!
//! The page logic (input resolution, state machine, view model) lives in the
//! `tree-evaluation` crate; this crate binds it to the router, the browser
//! fetch API, and the browser's alert dialog.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
