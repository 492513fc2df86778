//! Logout confirmation screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Confirming tells the backend to drop the session cookie, then always
//! wipes local and session storage and returns to sign-in, even when the
//! backend call failed. Cancelling steps back in history.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::client::{ApiClient, Transport};
use crate::net::error::body_message;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::toasts::{Notify, ToastState};
use crate::util::auth::{SIGN_IN_PATH, replace_history};

pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const LOGOUT_FAILED_MESSAGE: &str = "Logout failed";

/// Log out and clear client storage. Returns `false` without doing anything
/// when there is no session to end.
pub async fn confirm_logout<T: Transport>(transport: &T, notify: &impl Notify, stores: &Stores, authenticated: bool) -> bool {
    if !authenticated {
        return false;
    }
    let resp = api::logout(transport).await;
    if resp.status == 200 {
        notify.success(body_message(&resp.body).unwrap_or(LOGOUT_SUCCESS_MESSAGE));
    } else {
        log::warn!("logout returned status {}", resp.status);
        notify.error(body_message(&resp.body).unwrap_or(LOGOUT_FAILED_MESSAGE));
    }
    stores.clear_all();
    true
}

fn go_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let stores = expect_context::<Stores>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_confirm = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        let stores = stores.clone();
        let navigate = navigate.clone();
        let authenticated = auth.with_untracked(AuthState::is_authenticated);
        spawn_local(async move {
            let logged_out = confirm_logout(&client, &toasts, &stores, authenticated).await;
            busy.set(false);
            if logged_out {
                auth.update(|a| a.set_authenticated(false));
                navigate(SIGN_IN_PATH, replace_history());
            }
        });
    };

    view! {
        <Title text="Logout"/>
        <div class="dialog-backdrop dialog-backdrop--opaque">
            <div class="dialog dialog--confirm">
                <h2>"Confirm Logout"</h2>
                <p class="dialog__body">"Are you sure you want to log out?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| go_back()>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=move || busy.get() on:click=on_confirm>
                        "Yes, Logout"
                    </button>
                </div>
            </div>
        </div>
    }
}
