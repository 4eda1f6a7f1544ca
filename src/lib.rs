//! # site-footer
//!
//! Leptos + WASM site footer: theme switch, visitor counters, feed popup
//! and CDN attribution. Rendered on the server by the `server` crate and
//! hydrated in the browser.
//!
//! Browser side effects (storage, media queries, DOM attributes, fetches)
//! only exist under the `hydrate` feature. Everything else compiles to inert
//! stand-ins so the policy code stays testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
