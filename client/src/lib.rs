//! # client
//!
//! Leptos + WASM frontend for the live voting statistics dashboard.
//!
//! Two independent screens share nothing but the `votestats` derivation
//! crate: the public overview of every role and the credential-gated
//! candidate results. Each page owns its fetch lifecycle; components only
//! render values handed to them.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
