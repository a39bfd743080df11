//! # client
//!
//! Leptos + WASM frontend for the CarLogix vehicle manager: a single page
//! that edits a draft car and posts it to `/api/vehicles`.
//!
//! Build with `--features csr` for the browser. Without it the crate compiles
//! natively so the pure helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install console logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting vehicle manager");
    leptos::mount::mount_to_body(app::App);
}
