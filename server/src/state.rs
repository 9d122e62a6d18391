//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The server keeps no domain state of its own — just the upstream API
//! base URL and a shared HTTP client for the `/api` relay.

use std::time::Duration;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — `reqwest::Client` is an internal Arc.
#[derive(Clone)]
pub struct AppState {
    /// Base URL of the external intel/auth API, e.g. `http://intel.internal:8080`.
    pub upstream_base: String,
    /// Shared connection pool for upstream relays.
    pub http: reqwest::Client,
}

impl AppState {
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    #[must_use]
    pub fn new(upstream_base: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("http client init failed");
        Self { upstream_base, http }
    }
}
