pub mod app;
pub mod data;
pub mod error;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod settings;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
