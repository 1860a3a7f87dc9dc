//! ISmart Storefront Site
//!
//! Leptos components and pages for the storefront. The `ssr` build is served
//! by `main.rs`; the `hydrate` build is loaded in the browser.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
