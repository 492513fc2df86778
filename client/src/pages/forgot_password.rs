//! First step of the password reset flow: request a one-time code.
//!
//! The email is checked against the admin login endpoint before a code is
//! sent, so codes only go to admin accounts.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::client::{ApiClient, Transport, encode_segment};
use crate::state::toasts::{Notify, ToastState};
use crate::util::auth::SIGN_IN_PATH;
use crate::util::validation::validate_email;

pub const OTP_SENT_MESSAGE: &str = "OTP sent successfully";
pub const INVALID_EMAIL_TOAST: &str = "Invalid email";

/// Route of the code entry page for `email`.
pub fn verify_otp_path(email: &str) -> String {
    format!("/verify-otp/{}", encode_segment(email))
}

/// Validate the email, confirm it is an admin and send a code.
///
/// Returns the verification route to open on success. Every failure has
/// already been toasted when `None` comes back.
pub async fn request_reset_code<T: Transport>(transport: &T, notify: &impl Notify, raw_email: &str) -> Option<String> {
    let email = match validate_email(raw_email) {
        Ok(email) => email,
        Err(message) => {
            notify.error(message);
            return None;
        }
    };

    let sent = match api::check_admin_email(transport, &email).await {
        Ok(()) => api::send_password_otp(transport, &email).await,
        Err(err) => Err(err),
    };
    match sent {
        Ok(_) => {
            notify.success(OTP_SENT_MESSAGE);
            Some(verify_otp_path(&email))
        }
        Err(err) => {
            log::error!("password reset request failed: {err}");
            notify.error(INVALID_EMAIL_TOAST);
            None
        }
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        let raw_email = email.get_untracked();
        spawn_local(async move {
            let next = request_reset_code(&client, &toasts, &raw_email).await;
            loading.set(false);
            if let Some(path) = next {
                navigate(&path, NavigateOptions::default());
            }
        });
    };

    view! {
        <Title text="Forgot Password"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">"Enter your admin email to receive a verification code."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-field">
                        <span class="auth-field__label">"Email Address"</span>
                        <input
                            class="auth-input"
                            type="email"
                            name="email"
                            required
                            disabled=move || loading.get()
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Processing..." } else { "Send OTP" }}
                    </button>
                    <A href=SIGN_IN_PATH attr:class="auth-link">
                        "Back to Login"
                    </A>
                </form>
            </div>
        </div>
    }
}
