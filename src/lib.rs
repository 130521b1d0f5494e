//! # socialconnect
//!
//! Leptos + WASM page shell for the SocialConnect web client.
//!
//! The shell renders navigation, header chrome and the theme menu around page
//! content. Theme reconciliation itself lives in the `theme` crate; this crate
//! supplies the browser side of every collaborator (`localStorage`,
//! `matchMedia`, the `<html>` class list, the identity HTTP API) and wires a
//! single `ThemeResolver` into the `Layout` component.
//!
//! EMBEDDING
//! =========
//! This crate ships no server. A host server depends on it with the `ssr`
//! feature and serves [`app::shell`]; the same crate compiled to WASM with
//! `hydrate` exports `hydrate()` to take over the rendered document. The
//! host also serves the identity API under `/api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
