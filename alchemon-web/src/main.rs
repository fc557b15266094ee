//! Alchemon Dashboard - Leptos Frontend
//!
//! Connects a browser wallet on Sepolia and lists the Alchemon NFTs it owns.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Alchemon dashboard starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
