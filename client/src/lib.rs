//! # client
//!
//! Leptos + WASM frontend for the Quenify restaurant ordering system.
//!
//! Customers browse the menu, build a cart, place orders, call for
//! assistance and view their bill. Managers edit the menu, tables and staff
//! accounts; kitchen and wait staff work the order board and table view.
//! Every screen talks to the restaurant backend through the REST helpers in
//! `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("quenify client hydrating");
    leptos::mount::hydrate_body(app::App);
}
