//! Route access gate — per-request allow/redirect decision.
//!
//! DESIGN
//! ======
//! Every navigation passes through `route_gate` before any page renders.
//! The decision is a pure function of the requested path and the presence
//! of the session cookie: no network I/O, no suspension, no failure mode.
//! Credential *validity* is deliberately not checked here — that is the
//! upstream auth API's job, re-verified by the client's session bootstrap
//! after the page mounts. An expired-but-present token passes the gate.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Cookie holding the opaque session credential. Set and cleared by the
/// upstream auth API via pass-through `Set-Cookie`; only read here.
pub const SESSION_COOKIE: &str = "token";

/// Routes reachable without a credential (prefix match).
pub const PUBLIC_PATHS: &[&str] = &["/login", "/register", "/verify-otp", "/reset-password"];

/// Prefixes the gate never evaluates: the API and upload relays,
/// compiled static assets, the favicon, and the load-balancer probe.
pub const BYPASS_PATHS: &[&str] = &["/api", "/uploads", "/pkg", "/favicon.ico", "/healthz"];

/// Outcome of a gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Serve the requested page.
    Allow,
    /// Issue a temporary redirect to the given path.
    RedirectTo(&'static str),
}

/// True if the path is reachable without a session credential.
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|public| path.starts_with(public))
}

/// True if the path is excluded from gating entirely.
#[must_use]
pub fn is_bypassed_path(path: &str) -> bool {
    BYPASS_PATHS.iter().any(|bypass| path.starts_with(bypass))
}

/// Decide whether to serve `path` given the presence of a credential.
///
/// Pure and total: every input yields a decision, never an error. A
/// malformed or empty path is treated as non-public, so it requires a
/// credential. The root path is always redirected, never rendered.
#[must_use]
pub fn decide(path: &str, has_credential: bool) -> GateDecision {
    if is_bypassed_path(path) {
        return GateDecision::Allow;
    }

    // Root always bounces to the landing page for the auth state.
    if path == "/" {
        return if has_credential {
            GateDecision::RedirectTo("/dashboard")
        } else {
            GateDecision::RedirectTo("/login")
        };
    }

    if is_public_path(path) {
        return GateDecision::Allow;
    }

    if has_credential {
        GateDecision::Allow
    } else {
        GateDecision::RedirectTo("/login")
    }
}

/// Axum middleware applying [`decide`] to every request.
///
/// An unauthenticated access attempt is a normal branch, not an error:
/// nothing is logged above debug and no error body is produced — the
/// user simply lands on `/login`.
pub async fn route_gate(jar: CookieJar, req: Request, next: Next) -> Response {
    let token = jar.get(SESSION_COOKIE).map(Cookie::value).unwrap_or_default();
    let has_credential = !token.is_empty();

    match decide(req.uri().path(), has_credential) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::RedirectTo(target) => {
            tracing::debug!(path = req.uri().path(), has_credential, target, "gate redirect");
            Redirect::temporary(target).into_response()
        }
    }
}
