//! # client
//!
//! Leptos + WASM front end for the image board: an upload zone and gallery
//! on the left, a freeform canvas on the right.
//!
//! All board state transitions live in the `board` crate; components here
//! translate DOM events into its inputs and execute the actions it returns.
//! Build for the browser with the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    leptos::mount::mount_to_body(app::App);
}
