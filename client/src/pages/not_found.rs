//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::util::auth::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not available"/>
        <div class="not-found">
            <div class="not-found__card">
                <h1>"Page not available"</h1>
                <p class="not-found__lead">
                    "The page you are trying to access does not exist or may have been moved. "
                    "Your information remains secure."
                </p>
                <p class="not-found__help">"If you are looking for support, help is always available."</p>
                <div class="not-found__actions">
                    <A href=HOME_PATH attr:class="btn btn--primary">
                        "Go to Dashboard"
                    </A>
                    <A href="/admin/counsellors" attr:class="btn">
                        "Speak with a Counsellor"
                    </A>
                </div>
                <p class="not-found__footnote">"Safe Harbour supports your mental and emotional well-being."</p>
            </div>
        </div>
    }
}
