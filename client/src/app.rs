//! Root application component, HTML shell and router.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every piece of shared state and provides it through Leptos
//! context: the session and theme flags (persisted in local storage), the
//! toast queue, the storage handles and the backend client. Pages read these
//! with `expect_context` and never reach for globals.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::route_guard::PrivateRoutes;
use crate::components::toast_host::ToastHost;
use crate::net::client::ApiClient;
use crate::pages::add_counsellor::AddCounsellorPage;
use crate::pages::counsellors::CounsellorsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::logout::LogoutPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::sign_in::SignInPage;
use crate::pages::users::UsersPage;
use crate::pages::verify_otp::VerifyOtpPage;
use crate::state::Stores;
use crate::state::auth::AuthState;
use crate::state::theme::ThemeState;
use crate::state::toasts::ToastState;
use crate::util::dark_mode;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Compiled stylesheet; cargo-leptos names it after the workspace `output-name`.
pub const STYLESHEET_HREF: &str = "/pkg/harbour-admin.css";

/// Full HTML document rendered by the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = Stores::browser();
    let auth = RwSignal::new(AuthState::load(stores.local.clone()));
    let theme = RwSignal::new(ThemeState::load(stores.local.clone()));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(theme);
    provide_context(toasts);
    provide_context(stores);
    provide_context(ApiClient::from_build_env());

    Effect::new(move || dark_mode::apply(theme.with(ThemeState::dark_mode)));

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title formatter=|text: String| format!("{text} | Safe Harbour Admin")/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/sign-in") view=SignInPage/>
                <Route path=path!("/forgot") view=ForgotPasswordPage/>
                <Route path=path!("/verify-otp/:email") view=VerifyOtpPage/>
                <Route path=path!("/reset-password") view=ResetPasswordPage/>
                <ParentRoute path=path!("") view=PrivateRoutes>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("/user-management") view=UsersPage/>
                    <Route path=path!("/admin/counsellors") view=CounsellorsPage/>
                    <Route path=path!("/admin/counsellors/add") view=AddCounsellorPage/>
                    <Route path=path!("/logout") view=LogoutPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
