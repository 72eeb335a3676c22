//! # portfolio-client
//!
//! Leptos + WASM front-end for the personal portfolio site.
//!
//! The page is server-rendered by the `portfolio` host and hydrated here.
//! Each section of the page owns a small controller: the loading splash,
//! navigation, scroll reveal, the contact form, decorative effects, and lazy
//! images. Rules that can be checked without a browser live in `state` and
//! `util`; everything touching `web_sys` is gated behind the `hydrate`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    util::bootstrap::install_browser_hooks();
    leptos::mount::hydrate_body(app::App);

    log::info!("portfolio initialized");
}
