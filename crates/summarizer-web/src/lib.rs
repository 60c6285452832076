/// Summarizer Web Interface
///
/// Leptos-based web UI for the transformer summarizer: a chat-style page with a
/// collapsible sidebar of past summaries and example prompts.

pub mod app;
pub mod components;
pub mod error;
pub mod example_prompts;
pub mod history;
pub mod pages;
pub mod types;
pub mod utils;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    log::debug!("hydrating summarizer web interface");
    leptos::mount_to_body(App);
}
