//! Admin sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. A successful login flips the persisted session flag; the
//! signed-in redirect effect then moves the admin to the dashboard. Every
//! login outcome produces exactly one toast.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, LoginOutcome};
use crate::net::client::{ApiClient, Transport};
use crate::net::error::{GENERIC_FAILURE_MESSAGE, UNREACHABLE_MESSAGE};
use crate::state::auth::AuthState;
use crate::state::toasts::{Notify, ToastKind, ToastState};
use crate::util::auth::install_signed_in_redirect;
use crate::util::validation::validate_sign_in;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Toast kind and text for a login outcome.
pub fn login_toast(outcome: &LoginOutcome) -> (ToastKind, String) {
    match outcome {
        LoginOutcome::Ok => (ToastKind::Success, LOGIN_SUCCESS_MESSAGE.to_owned()),
        LoginOutcome::NotAdmin(msg) => (ToastKind::Warning, msg.clone()),
        LoginOutcome::InvalidCredentials(msg) | LoginOutcome::NotFound(msg) => (ToastKind::Error, msg.clone()),
        LoginOutcome::Unreachable => (ToastKind::Error, UNREACHABLE_MESSAGE.to_owned()),
        LoginOutcome::Unknown(_) | LoginOutcome::Malformed(_) => (ToastKind::Error, GENERIC_FAILURE_MESSAGE.to_owned()),
    }
}

/// Attempt a login and announce the outcome.
pub async fn submit_sign_in<T: Transport>(
    transport: &T,
    notify: &impl Notify,
    email: &str,
    password: &str,
) -> LoginOutcome {
    let outcome = api::login(transport, email, password).await;
    let (kind, message) = login_toast(&outcome);
    notify.notify(kind, &message);
    outcome
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = RwSignal::new(false);

    install_signed_in_redirect(auth, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };
        loading.set(true);
        let client = client.clone();
        spawn_local(async move {
            let outcome = submit_sign_in(&client, &toasts, &email_value, &password_value).await;
            loading.set(false);
            if outcome.is_ok() {
                auth.update(|a| a.set_authenticated(true));
            }
        });
    };

    view! {
        <Title text="Sign In"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Safe Harbour Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-field">
                        <span class="auth-field__label">"Email Address"</span>
                        <input
                            class="auth-input"
                            type="email"
                            name="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-field">
                        <span class="auth-field__label">"Password"</span>
                        <span class="auth-field__password">
                            <input
                                class="auth-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                name="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="auth-field__reveal"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </span>
                    </label>
                    <A href="/forgot" attr:class="auth-link">
                        "Forgot Password?"
                    </A>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                    <p class="auth-card__footnote">"Authorized Admins Only"</p>
                </form>
            </div>
        </div>
    }
}
