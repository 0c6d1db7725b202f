//! # academy-client
//!
//! Leptos + WASM front-end for the Academy course platform.
//!
//! This crate contains the page shell, the in-memory page selector and
//! router, the auth session mirror, and a small Supabase auth client. The
//! `academy` server crate renders it with SSR and the browser bundle
//! hydrates it.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
