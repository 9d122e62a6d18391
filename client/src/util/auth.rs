//! Session bootstrap wiring for the protected shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access gate has already admitted the request by the time this
//! runs; here the opaque credential is resolved into an actual identity.
//! Failure is soft: the shell keeps rendering with `user = None` and no
//! redirect is issued.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Resolve the identity behind the session credential, exactly once per
/// mount of the protected shell.
///
/// The fetch does not block paint: the shell renders immediately with an
/// empty user and re-renders when the check resolves. A cleanup hook
/// invalidates the generation so a late resolution from this mount can
/// never write state after teardown.
pub fn install_session_bootstrap(auth: RwSignal<AuthState>) {
    let generation = auth.try_update(AuthState::begin_bootstrap).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|state| state.apply_bootstrap(generation, user));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = generation;

    on_cleanup(move || {
        let _ = auth.try_update(AuthState::invalidate);
    });
}
