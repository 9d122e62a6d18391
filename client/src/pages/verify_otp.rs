//! OTP verification page. Email is prefilled from the `?email=` query
//! parameter when arriving from registration.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let query = use_query_map();
    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let resending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let otp_value = otp.get();
        if email_value.is_empty() || otp_value.is_empty() {
            error.set("Enter your email and the verification code.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_otp(&email_value, &otp_value).await {
                Ok(message) => {
                    success.set(message);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    error.set(format!("Verification failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    let on_resend = move |_| {
        if resending.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            error.set("Enter your email first.".to_owned());
            return;
        }
        resending.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_otp(&email_value).await {
                Ok(()) => success.set("Verification code resent successfully".to_owned()),
                Err(e) => error.set(format!("Resend failed: {e}")),
            }
            resending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card card">
                <h1>"Verify Your Account"</h1>
                <p class="auth-card__subtitle">"Enter the verification code sent to your email"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="input"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Verification Code"
                        <input
                            class="input input--code"
                            type="text"
                            maxlength="6"
                            placeholder="000000"
                            prop:value=move || otp.get()
                            on:input=move |ev| {
                                let digits: String = event_target_value(&ev)
                                    .chars()
                                    .filter(char::is_ascii_digit)
                                    .take(6)
                                    .collect();
                                otp.set(digits);
                            }
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify Account" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="auth-message auth-message--success">{move || success.get()}</p>
                </Show>
                <p class="auth-card__hint">
                    "Didn't receive the code? "
                    <button class="link-button" on:click=on_resend disabled=move || resending.get()>
                        {move || if resending.get() { "Resending..." } else { "Resend" }}
                    </button>
                </p>
                <div class="auth-links">
                    <a href="/login">"Back to login"</a>
                </div>
            </div>
        </div>
    }
}
