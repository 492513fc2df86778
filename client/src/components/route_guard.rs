//! Guard for the admin route subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent of every admin route. The decision is synchronous
//! and reads only the persisted session flag; the backend still enforces
//! authorization through its cookie.
//!
//! The flag lives in browser storage, so nothing is decided until the app has
//! hydrated. The server renders an empty outlet instead of redirecting.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::admin_drawer::AdminDrawer;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision, replace_history};

/// Admin layout when signed in, otherwise a history-replacing redirect to
/// the sign-in page.
#[component]
pub fn PrivateRoutes() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let hydrated = RwSignal::new(false);
    Effect::new(move || hydrated.set(true));

    move || {
        if !hydrated.get() {
            return ().into_any();
        }
        match guard_decision(auth.with(AuthState::is_authenticated)) {
            GuardDecision::Render => view! {
                <div class="admin-layout">
                    <AdminDrawer/>
                    <main class="admin-layout__content">
                        <Outlet/>
                    </main>
                </div>
            }
            .into_any(),
            GuardDecision::Redirect(path) => view! { <Redirect path=path options=replace_history()/> }.into_any(),
        }
    }
}
