//! Reverse proxy for `/api/*` and `/uploads/*` — forwards to the
//! external intel API.
//!
//! DESIGN
//! ======
//! The front-end owns no business logic: IOC search, report aggregation,
//! and all auth flows live behind `INTEL_API_URL`. The browser talks to
//! the same origin it was served from, and this module relays method,
//! path, query, body, and cookies in both directions so the upstream can
//! set and clear the session cookie itself.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Maximum request body relayed upstream (form posts and small JSON only).
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Headers that must not be relayed between hops.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    Body(#[from] axum::Error),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "api proxy failure");
        let status = match self {
            ProxyError::Body(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Join the upstream base URL with the request's path and query.
fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// True if the header must be stripped before relaying.
fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Copy relayable headers, dropping hop-by-hop ones.
fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        if !is_hop_by_hop(name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Relay a request to the upstream intel API, preserving its path.
///
/// # Errors
///
/// Returns `502 Bad Gateway` if the upstream is unreachable and
/// `400 Bad Request` if the request body cannot be buffered.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_owned();
    let url = upstream_url(&state.upstream_base, &path_and_query);

    let method = req.method().clone();
    let request_headers = filter_headers(req.headers());
    let body_bytes = body::to_bytes(req.into_body(), BODY_LIMIT).await?;

    let upstream = state
        .http
        .request(method, &url)
        .headers(request_headers)
        .body(body_bytes)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    tracing::debug!(%status, path = %path_and_query, "api proxy relay");
    Ok((status, response_headers, bytes).into_response())
}
