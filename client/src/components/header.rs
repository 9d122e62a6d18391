//! Top bar: page context on the left, identity block on the right.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Header for the protected shell.
///
/// Renders personalized content only once the session bootstrap has
/// resolved a user; until then (and on bootstrap failure) the identity
/// block is simply absent.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::clear);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="header">
            <div class="header__titles">
                <h2 class="header__title">"Security Operations Center"</h2>
                <p class="header__subtitle">"Real-time threat intelligence monitoring"</p>
            </div>
            <div class="header__actions">
                <Show when=move || auth.get().user.is_some()>
                    <div class="header__user">
                        <div class="header__user-meta">
                            <p class="header__user-name">
                                {move || {
                                    auth.get()
                                        .user
                                        .map(|u| format!("{} {}", u.first_name, u.last_name))
                                        .unwrap_or_default()
                                }}
                            </p>
                            <p class="header__user-role">
                                {move || auth.get().user.map(|u| u.role).unwrap_or_default()}
                            </p>
                        </div>
                        <div class="header__avatar">
                            {move || {
                                let user = auth.get().user;
                                match user.as_ref().and_then(|u| u.image.clone()) {
                                    Some(image) => {
                                        let alt = user.map(|u| u.username).unwrap_or_default();
                                        view! {
                                            <img class="header__avatar-img" src=format!("/uploads/{image}") alt=alt/>
                                        }
                                            .into_any()
                                    }
                                    None => view! { <span class="header__avatar-fallback">"●"</span> }.into_any(),
                                }
                            }}
                        </div>
                        <button class="btn header__logout" on:click=on_logout title="Logout">
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
