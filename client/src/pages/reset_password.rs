//! Last step of the password reset flow: choose a new password.
//!
//! Only reachable after `/verify-otp` stored the verified email in session
//! storage; without it the admin is sent back to `/forgot`.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::client::{ApiClient, Transport};
use crate::state::Stores;
use crate::state::persist::KeyValueStore;
use crate::state::reset_flow::{forget_verified_email, verified_email};
use crate::state::toasts::{Notify, ToastState};
use crate::util::async_call::{CallOptions, ResponseShape, run_request};
use crate::util::auth::SIGN_IN_PATH;
use crate::util::validation::validate_new_password;

pub const FORGOT_PATH: &str = "/forgot";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please start over.";
pub const RESET_SUCCESS_MESSAGE: &str = "Password reset successful! Please login.";

/// Validate and submit the new password. Returns the route to open next,
/// or `None` to stay on the form.
pub async fn submit_new_password<T: Transport>(
    transport: &T,
    notify: &impl Notify,
    session: &dyn KeyValueStore,
    password: &str,
    confirm: &str,
    set_loading: impl Fn(bool),
) -> Option<&'static str> {
    let Some(email) = verified_email(session) else {
        notify.error(SESSION_EXPIRED_MESSAGE);
        return Some(FORGOT_PATH);
    };
    if let Err(message) = validate_new_password(password, confirm) {
        notify.error(message);
        return None;
    }

    let options = CallOptions::new().loading(set_loading).success_message(RESET_SUCCESS_MESSAGE);
    let response =
        run_request(notify, options, ResponseShape::Full, || api::reset_password(transport, &email, password)).await.ok()?;
    log::info!("password reset accepted with status {}", response["status"]);
    forget_verified_email(session);
    Some(SIGN_IN_PATH)
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let stores = expect_context::<Stores>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = RwSignal::new(false);

    {
        let session = stores.session.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if verified_email(session.as_ref()).is_none() {
                toasts.error(SESSION_EXPIRED_MESSAGE);
                navigate(FORGOT_PATH, NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let client = client.clone();
        let session = stores.session.clone();
        let navigate = navigate.clone();
        let (password_value, confirm_value) = (password.get_untracked(), confirm.get_untracked());
        spawn_local(async move {
            let next = submit_new_password(&client, &toasts, session.as_ref(), &password_value, &confirm_value, move |v| {
                loading.set(v);
            })
            .await;
            if let Some(path) = next {
                navigate(path, NavigateOptions::default());
            }
        });
    };

    let input_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <Title text="Reset Password"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Set New Password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-field">
                        <span class="auth-field__label">"New Password"</span>
                        <input
                            class="auth-input"
                            type=input_type
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-field">
                        <span class="auth-field__label">"Confirm Password"</span>
                        <input
                            class="auth-input"
                            type=input_type
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-field auth-field--inline">
                        <input type="checkbox" prop:checked=move || show_password.get() on:change=move |_| show_password.update(|v| *v = !*v)/>
                        <span>"Show passwords"</span>
                    </label>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
