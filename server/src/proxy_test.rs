use axum::http::HeaderValue;

use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(
        upstream_url("http://intel.internal:8080", "/api/iocs/search?limit=50"),
        "http://intel.internal:8080/api/iocs/search?limit=50"
    );
}

#[test]
fn upstream_url_strips_trailing_slash_from_base() {
    assert_eq!(upstream_url("http://intel.internal/", "/api/auth/me"), "http://intel.internal/api/auth/me");
}

// =============================================================================
// header filtering
// =============================================================================

#[test]
fn hop_by_hop_headers_are_stripped() {
    for name in ["connection", "Transfer-Encoding", "HOST", "content-length", "upgrade"] {
        assert!(is_hop_by_hop(name), "expected {name} to be hop-by-hop");
    }
}

#[test]
fn end_to_end_headers_are_kept() {
    for name in ["cookie", "set-cookie", "authorization", "content-type", "accept"] {
        assert!(!is_hop_by_hop(name), "expected {name} to be relayed");
    }
}

#[test]
fn filter_headers_preserves_cookie_and_drops_host() {
    let mut headers = HeaderMap::new();
    headers.insert("cookie", HeaderValue::from_static("token=abc"));
    headers.insert("host", HeaderValue::from_static("dashboard.local"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));

    let filtered = filter_headers(&headers);
    assert_eq!(filtered.get("cookie"), Some(&HeaderValue::from_static("token=abc")));
    assert_eq!(filtered.get("content-type"), Some(&HeaderValue::from_static("application/json")));
    assert!(filtered.get("host").is_none());
}

#[test]
fn filter_headers_keeps_repeated_set_cookie() {
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("token=abc; Path=/"));
    headers.append("set-cookie", HeaderValue::from_static("theme=dark; Path=/"));

    let filtered = filter_headers(&headers);
    assert_eq!(filtered.get_all("set-cookie").iter().count(), 2);
}
