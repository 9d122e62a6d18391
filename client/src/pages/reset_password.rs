//! Password reset: request a code by email, then set a new password.

use leptos::prelude::*;

/// Which half of the two-step flow is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Email,
    Reset,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let step = RwSignal::new(Step::Email);
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            error.set("Enter your email first.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_otp(&email_value).await {
                Ok(()) => {
                    success.set("Verification code sent to your email".to_owned());
                    step.set(Step::Reset);
                }
                Err(e) => error.set(format!("Code request failed: {e}")),
            }
            busy.set(false);
        });
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        if new_password.get() != confirm.get() {
            error.set("Passwords do not match".to_owned());
            return;
        }
        let email_value = email.get().trim().to_owned();
        let otp_value = otp.get();
        let password_value = new_password.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password(&email_value, &otp_value, &password_value).await {
                Ok(message) => {
                    success.set(message);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    error.set(format!("Password reset failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">
                    {move || match step.get() {
                        Step::Email => "Enter your email to receive a verification code",
                        Step::Reset => "Enter the code and your new password",
                    }}
                </p>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="auth-message auth-message--success">{move || success.get()}</p>
                </Show>
                <Show
                    when=move || step.get() == Step::Reset
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_request_code>
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
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Sending..." } else { "Send Code" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_reset>
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
                        <label class="auth-form__label">
                            "New Password"
                            <input
                                class="input"
                                type="password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                class="input"
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                        </button>
                    </form>
                </Show>
                <div class="auth-links">
                    <a href="/login">"Back to login"</a>
                </div>
            </div>
        </div>
    }
}
