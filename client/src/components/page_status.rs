//! Breadcrumb header shown at the top of admin pages.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Home link followed by the page title. Also sets the document title.
#[component]
pub fn PageStatus(title: &'static str) -> impl IntoView {
    view! {
        <Title text=title/>
        <div class="page-status">
            <A href="/" attr:class="page-status__home" attr:aria-label="Home">
                "⌂"
            </A>
            <span class="page-status__divider">"/"</span>
            <span class="page-status__title">{title}</span>
        </div>
    }
}
