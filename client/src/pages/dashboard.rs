//! Authenticated landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::admin_drawer::ADMIN_MENU;
use crate::components::page_status::PageStatus;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let shortcuts = ADMIN_MENU
        .iter()
        .flat_map(|section| section.items)
        .map(|item| {
            view! {
                <A href=item.route attr:class="dashboard__shortcut">
                    {item.label}
                </A>
            }
        })
        .collect_view();

    view! {
        <PageStatus title="Dashboard"/>
        <section class="dashboard">
            <div class="dashboard__shortcuts">{shortcuts}</div>
        </section>
    }
}
