//! Interaction layer for the portfolio page: smooth anchor scrolling,
//! scroll-driven nav state, reveal-on-scroll animations and the contact form.
//! The page itself is static markup (see `index.html`); this crate only
//! attaches behavior to it.

use log::{info, Level};
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod config;
pub mod contact;
pub mod geometry;
pub mod notify;
mod reveal;
mod scrollnav;

/// Wires all page behaviors against the given document. Each component
/// attaches independently; none shares state with the others.
pub fn init_page_interactions(document: &Document) {
    scrollnav::attach(document);
    reveal::attach(document);
    contact::attach(document);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting page interactions");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");
    init_page_interactions(&document);
    Ok(())
}
