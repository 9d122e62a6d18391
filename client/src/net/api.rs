//! REST helpers for the intel API, via the server's same-origin `/api` relay.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! data fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{IocSearchResponse, IocType, ReportSummary, SeverityLevel, User};
#[cfg(feature = "hydrate")]
use super::types::CurrentUserResponse;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Filters for an IOC search request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IocSearchParams {
    pub query: Option<String>,
    pub kind: Option<IocType>,
    pub severity: Option<SeverityLevel>,
    pub limit: u32,
    pub offset: u32,
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Percent-encode a query-string component (RFC 3986 unreserved set).
#[cfg(any(test, feature = "hydrate"))]
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Build the search URL for the given filters. Empty filters are omitted.
#[cfg(any(test, feature = "hydrate"))]
fn ioc_search_url(params: &IocSearchParams) -> String {
    let mut url = format!("/api/iocs/search?limit={}&offset={}", params.limit, params.offset);
    if let Some(query) = params.query.as_deref() {
        if !query.is_empty() {
            url.push_str("&query=");
            url.push_str(&encode_component(query));
        }
    }
    if let Some(kind) = params.kind {
        url.push_str("&type=");
        url.push_str(kind.as_str());
    }
    if let Some(severity) = params.severity {
        url.push_str("&severity=");
        url.push_str(severity.as_str());
    }
    url
}

/// Upstream message envelope; the API echoes a human-readable status line.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message_en: Option<String>,
}

/// Fetch the currently authenticated user from `GET /api/auth/me`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CurrentUserResponse>().await.ok()?.user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in with username and password via `POST /api/auth/login`.
/// The upstream sets the session cookie on success.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /api/auth/register`.
/// The upstream emails an OTP; the caller continues on `/verify-otp`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn register(username: &str, email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("registration", resp.status()));
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message_en.unwrap_or_else(|| "Account created".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Verify an emailed OTP via `POST /api/auth/verify-otp`.
///
/// # Errors
///
/// Returns an error string if the request fails or the code is rejected.
pub async fn verify_otp(email: &str, otp: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "otp": otp });
        let resp = gloo_net::http::Request::post("/api/auth/verify-otp")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("verification", resp.status()));
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message_en.unwrap_or_else(|| "Account verified".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, otp);
        Err("not available on server".to_owned())
    }
}

/// Re-send the OTP email via `POST /api/auth/resend-otp`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn resend_otp(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/resend-otp")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("resend", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Reset a password with an OTP via `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn reset_password(email: &str, otp: &str, new_password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "otp": otp, "newPassword": new_password });
        let resp = gloo_net::http::Request::post("/api/auth/reset-password")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("password reset", resp.status()));
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message_en.unwrap_or_else(|| "Password updated".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, otp, new_password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
/// The upstream clears the session cookie.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Search IOCs via `GET /api/iocs/search`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn search_iocs(params: &IocSearchParams) -> Result<IocSearchResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = ioc_search_url(params);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("IOC search", resp.status()));
        }
        resp.json::<IocSearchResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err("not available on server".to_owned())
    }
}

/// Fetch the aggregated report via `GET /api/reports/summary`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn fetch_report_summary() -> Result<ReportSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/reports/summary")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("report fetch", resp.status()));
        }
        resp.json::<ReportSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
