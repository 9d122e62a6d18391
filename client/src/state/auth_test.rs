use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        first_name: "Dana".to_owned(),
        last_name: "Reyes".to_owned(),
        role: "analyst".to_owned(),
        username: "dreyes".to_owned(),
        image: None,
    }
}

#[test]
fn default_state_has_no_user_and_is_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn begin_bootstrap_sets_loading_and_returns_generation() {
    let mut state = AuthState::default();
    let generation = state.begin_bootstrap();
    assert!(state.loading);
    assert_eq!(generation, state.generation);
}

#[test]
fn successful_resolution_populates_user() {
    let mut state = AuthState::default();
    let generation = state.begin_bootstrap();
    state.apply_bootstrap(generation, Some(sample_user()));
    assert_eq!(state.user, Some(sample_user()));
    assert!(!state.loading);
}

#[test]
fn failed_resolution_leaves_user_none() {
    let mut state = AuthState::default();
    let generation = state.begin_bootstrap();
    state.apply_bootstrap(generation, None);
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn stale_resolution_after_unmount_is_ignored() {
    let mut state = AuthState::default();
    let generation = state.begin_bootstrap();
    state.invalidate();
    state.apply_bootstrap(generation, Some(sample_user()));
    assert!(state.user.is_none());
}

#[test]
fn stale_resolution_after_remount_is_ignored() {
    let mut state = AuthState::default();
    let first = state.begin_bootstrap();
    state.invalidate();
    let second = state.begin_bootstrap();

    // The old mount's response arrives late with a fabricated user; the
    // new mount's response (logged out) must win.
    state.apply_bootstrap(second, None);
    state.apply_bootstrap(first, Some(sample_user()));

    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn clear_drops_user_and_invalidates_inflight() {
    let mut state = AuthState::default();
    let generation = state.begin_bootstrap();
    state.apply_bootstrap(generation, Some(sample_user()));

    let stale = state.begin_bootstrap();
    state.clear();
    state.apply_bootstrap(stale, Some(sample_user()));

    assert!(state.user.is_none());
    assert!(!state.loading);
}
