//! Protected-area layout: sidebar + header around the page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside this shell. The access gate has
//! already admitted the navigation server-side; mounting the shell kicks
//! off the session bootstrap that resolves the credential into a user.
//! Content is never blocked on that resolution — the header simply fills
//! in once the identity check lands, or stays anonymous if it fails.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_session_bootstrap;

/// Layout wrapper for protected pages.
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_bootstrap(auth);

    view! {
        <div class="shell">
            <Sidebar/>
            <div class="shell__main">
                <Header/>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
