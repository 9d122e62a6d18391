use super::*;

// =============================================================================
// Public paths — always allowed, regardless of credential state.
// =============================================================================

#[test]
fn public_paths_allowed_without_credential() {
    for path in ["/login", "/register", "/verify-otp", "/reset-password"] {
        assert_eq!(decide(path, false), GateDecision::Allow, "expected Allow for {path}");
    }
}

#[test]
fn public_paths_allowed_with_credential() {
    for path in ["/login", "/register", "/verify-otp", "/reset-password"] {
        assert_eq!(decide(path, true), GateDecision::Allow, "expected Allow for {path}");
    }
}

#[test]
fn public_prefix_match_covers_subpaths() {
    assert_eq!(decide("/reset-password/confirm", false), GateDecision::Allow);
    assert_eq!(decide("/login/sso", false), GateDecision::Allow);
}

#[test]
fn public_prefix_match_ignores_query_string() {
    assert_eq!(decide("/verify-otp?email=a@b.com", false), GateDecision::Allow);
}

// =============================================================================
// Root — always redirected, never rendered.
// =============================================================================

#[test]
fn root_with_credential_redirects_to_dashboard() {
    assert_eq!(decide("/", true), GateDecision::RedirectTo("/dashboard"));
}

#[test]
fn root_without_credential_redirects_to_login() {
    assert_eq!(decide("/", false), GateDecision::RedirectTo("/login"));
}

// =============================================================================
// Protected paths.
// =============================================================================

#[test]
fn protected_path_without_credential_redirects_to_login() {
    assert_eq!(decide("/iocs", false), GateDecision::RedirectTo("/login"));
    assert_eq!(decide("/dashboard", false), GateDecision::RedirectTo("/login"));
    assert_eq!(decide("/reports", false), GateDecision::RedirectTo("/login"));
}

#[test]
fn protected_path_with_credential_allowed() {
    assert_eq!(decide("/iocs", true), GateDecision::Allow);
    assert_eq!(decide("/dashboard", true), GateDecision::Allow);
    assert_eq!(decide("/reports/weekly", true), GateDecision::Allow);
}

#[test]
fn unknown_path_without_credential_requires_auth() {
    assert_eq!(decide("/no-such-page", false), GateDecision::RedirectTo("/login"));
}

// =============================================================================
// Bypassed prefixes — never evaluated.
// =============================================================================

#[test]
fn bypassed_prefixes_always_allowed() {
    for path in [
        "/api/iocs/search",
        "/api/auth/me",
        "/uploads/avatar-9f2.png",
        "/pkg/sentinel-ui.wasm",
        "/favicon.ico",
        "/healthz",
    ] {
        assert_eq!(decide(path, false), GateDecision::Allow, "expected Allow for {path}");
        assert_eq!(decide(path, true), GateDecision::Allow, "expected Allow for {path}");
    }
}

// =============================================================================
// Edge cases.
// =============================================================================

#[test]
fn empty_path_treated_as_non_public() {
    assert_eq!(decide("", false), GateDecision::RedirectTo("/login"));
    assert_eq!(decide("", true), GateDecision::Allow);
}

#[test]
fn decision_is_idempotent() {
    for path in ["/", "/iocs", "/login", "/api/x", ""] {
        for cred in [false, true] {
            assert_eq!(decide(path, cred), decide(path, cred));
        }
    }
}

#[test]
fn is_public_path_rejects_protected_routes() {
    assert!(!is_public_path("/iocs"));
    assert!(!is_public_path("/"));
    assert!(is_public_path("/register"));
}

#[test]
fn is_bypassed_path_rejects_pages() {
    assert!(!is_bypassed_path("/dashboard"));
    assert!(is_bypassed_path("/api"));
}
