//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and the sign-in page must agree on where signed-in and
//! signed-out users belong. Both decisions live here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const HOME_PATH: &str = "/";

/// What the guard does for one render attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the nested routes.
    Render,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

pub fn guard_decision(authenticated: bool) -> GuardDecision {
    if authenticated { GuardDecision::Render } else { GuardDecision::Redirect(SIGN_IN_PATH) }
}

/// Navigation options that replace the current history entry.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Send an already signed-in user from a public page to the dashboard.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}
