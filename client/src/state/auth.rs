//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated by the session bootstrap (one identity fetch per protected
//! shell mount) and consumed by the header and user-aware components.
//!
//! DESIGN
//! ======
//! `generation` guards against stale async resolutions: each mount bumps
//! it before fetching, unmount bumps it again, and a resolution is only
//! applied while its generation still matches. A late response from a
//! previous mount can therefore never overwrite state after teardown or
//! remount. The user is never fabricated — it is `None` until the
//! identity check succeeds, and stays `None` on failure (soft degrade,
//! no redirect).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and bootstrap status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Identity behind the session credential, once resolved.
    pub user: Option<User>,
    /// True while an identity check for the current mount is in flight.
    pub loading: bool,
    /// Mount generation; stale resolutions carry an older value.
    pub generation: u64,
}

impl AuthState {
    /// Start a bootstrap for a new mount. Returns the generation the
    /// in-flight resolution must present to [`AuthState::apply_bootstrap`].
    pub fn begin_bootstrap(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a resolved identity check. Ignored if `generation` no longer
    /// matches (the shell unmounted or remounted while it was in flight).
    pub fn apply_bootstrap(&mut self, generation: u64, user: Option<User>) {
        if generation != self.generation {
            return;
        }
        self.user = user;
        self.loading = false;
    }

    /// Invalidate any in-flight bootstrap (called on unmount).
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Clear the resolved identity (logout).
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
        self.generation += 1;
    }
}
