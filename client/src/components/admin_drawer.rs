//! Permanent navigation drawer for the admin layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the admin sections from [`ADMIN_MENU`] and hosts the dark-mode
//! switch. The switch only flips the persisted preference; the app shell
//! mirrors it onto the document.

#[cfg(test)]
#[path = "admin_drawer_test.rs"]
mod admin_drawer_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::theme::ThemeState;
use crate::util::dark_mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuSection {
    pub section: &'static str,
    pub items: &'static [MenuItem],
}

pub const ADMIN_MENU: &[MenuSection] = &[
    MenuSection { section: "User Management", items: &[MenuItem { label: "All Users", route: "/user-management" }] },
    MenuSection {
        section: "Counsellors",
        items: &[
            MenuItem { label: "All Counsellors", route: "/admin/counsellors" },
            MenuItem { label: "Add Counsellor", route: "/admin/counsellors/add" },
        ],
    },
    MenuSection { section: "Authentication", items: &[MenuItem { label: "Logout", route: "/logout" }] },
];

/// Whether `route` is the page currently shown. Trailing slashes are ignored.
pub fn is_active(route: &str, pathname: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    current == route
}

#[component]
pub fn AdminDrawer() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let location = use_location();
    let navigate = use_navigate();

    let dark = move || theme.with(ThemeState::dark_mode);
    let on_toggle_dark = move |_| {
        theme.update(|t| {
            t.toggle();
        });
    };

    let sections = ADMIN_MENU
        .iter()
        .map(|section| {
            let items = section
                .items
                .iter()
                .map(|item| {
                    let route = item.route;
                    let navigate = navigate.clone();
                    let pathname = location.pathname;
                    view! {
                        <li>
                            <button
                                class="drawer__item"
                                class:drawer__item--active=move || pathname.with(|p| is_active(route, p))
                                on:click=move |_| navigate(route, NavigateOptions::default())
                            >
                                {item.label}
                            </button>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="drawer__section">
                    <p class="drawer__section-title">{section.section}</p>
                    <ul class="drawer__items">{items}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <nav class="drawer" class:drawer--dark=dark>
            <div class="drawer__sections">{sections}</div>
            <div class="drawer__footer">
                <label class="drawer__dark-toggle" title=move || dark_mode::toggle_label(dark())>
                    <span>"Dark Mode"</span>
                    <input type="checkbox" role="switch" prop:checked=dark on:change=on_toggle_dark/>
                </label>
            </div>
        </nav>
    }
}
