//! # client
//!
//! Leptos + WASM front-end for the Sentinel threat-intelligence
//! dashboard. All business logic — IOC storage, search ranking, report
//! aggregation, auth/OTP issuance — lives behind the external intel API;
//! this crate renders state and forms.
//!
//! The crate contains pages, components, reactive state, wire DTOs, and
//! REST helpers. The `server` crate links it for SSR; the browser loads
//! it as WASM under the `hydrate` feature.

// Deep view! nesting on the reports page exceeds the default type-layout
// recursion limit when monomorphized for SSR.
#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: take over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
