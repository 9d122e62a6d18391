use super::*;
use crate::net::types::{IocType, SeverityLevel};

// =============================================================================
// encode_component
// =============================================================================

#[test]
fn encode_component_leaves_unreserved_untouched() {
    assert_eq!(encode_component("abc-DEF_0.9~"), "abc-DEF_0.9~");
}

#[test]
fn encode_component_escapes_reserved_chars() {
    assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_component("198.51.100.0/24"), "198.51.100.0%2F24");
}

#[test]
fn encode_component_escapes_utf8_bytes() {
    assert_eq!(encode_component("Ünïcode"), "%C3%9Cn%C3%AFcode");
}

// =============================================================================
// ioc_search_url
// =============================================================================

#[test]
fn search_url_with_no_filters_has_only_paging() {
    let params = IocSearchParams { limit: 50, offset: 0, ..IocSearchParams::default() };
    assert_eq!(ioc_search_url(&params), "/api/iocs/search?limit=50&offset=0");
}

#[test]
fn search_url_includes_all_filters() {
    let params = IocSearchParams {
        query: Some("evil.example".to_owned()),
        kind: Some(IocType::Domain),
        severity: Some(SeverityLevel::High),
        limit: 50,
        offset: 100,
    };
    assert_eq!(
        ioc_search_url(&params),
        "/api/iocs/search?limit=50&offset=100&query=evil.example&type=domain&severity=high"
    );
}

#[test]
fn search_url_omits_empty_query() {
    let params = IocSearchParams { query: Some(String::new()), limit: 50, ..IocSearchParams::default() };
    assert_eq!(ioc_search_url(&params), "/api/iocs/search?limit=50&offset=0");
}

#[test]
fn search_url_encodes_query_value() {
    let params = IocSearchParams { query: Some("cmd /c evil".to_owned()), limit: 25, ..IocSearchParams::default() };
    assert_eq!(ioc_search_url(&params), "/api/iocs/search?limit=25&offset=0&query=cmd%20%2Fc%20evil");
}

// =============================================================================
// error message helpers
// =============================================================================

#[test]
fn request_failed_message_includes_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
    assert_eq!(request_failed_message("IOC search", 502), "IOC search failed: 502");
}
