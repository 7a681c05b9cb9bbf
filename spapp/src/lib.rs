pub mod app;
pub mod client;
pub mod component;
pub mod conf;
pub mod error;
pub mod error_template;
pub mod section;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
