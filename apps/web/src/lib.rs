#![recursion_limit = "512"]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod format;
pub mod models;
pub mod pages;
pub mod report_view;

#[cfg(feature = "ssr")]
pub mod server;
#[cfg(feature = "ssr")]
pub mod shell;
#[cfg(feature = "ssr")]
pub mod state;

pub use app::App;

#[cfg(feature = "hydrate")]
mod hydrate {
    use crate::App;
    use wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(start)]
    pub fn hydrate() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::hydrate_body(App);
    }
}
