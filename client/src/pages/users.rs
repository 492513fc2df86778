//! Users management table.
//!
//! DESIGN
//! ======
//! The backend exposes no user update endpoint, so Save in the edit dialog
//! only replaces the row in the loaded list.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::edit_dialog::EditDialog;
use crate::components::page_status::PageStatus;
use crate::components::record_table::{Column, RecordTable};
use crate::net::api;
use crate::net::client::{ApiClient, Transport};
use crate::net::types::User;
use crate::state::table::TableState;
use crate::state::toasts::{Notify, ToastState};
use crate::util::async_call::{CallOptions, run_async};

pub const USER_COLUMNS: &[Column] = &[
    Column::text("fullname", "Full Name"),
    Column::text("email", "Email"),
    Column::text("role", "Role"),
    Column::text("gender", "Gender"),
    Column::text("phone_number", "Phone"),
    Column::chip("authType", "Auth Type"),
    Column::text("status", "Status"),
];

pub const USER_EDIT_FIELDS: &[&str] = &["fullname", "email", "phone_number", "role", "status"];

pub const USER_SAVED_MESSAGE: &str = "User updated";

/// Load every user; failures leave the table empty after the error toast.
pub async fn fetch_users<T: Transport>(transport: &T, notify: &impl Notify, set_loading: impl Fn(bool)) -> Vec<User> {
    let options = CallOptions::new().loading(set_loading);
    run_async(notify, options, || api::fetch_all_users(transport)).await.unwrap_or_default()
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<ApiClient>();
    let table = RwSignal::new(TableState::<User>::default());

    Effect::new(move || {
        let client = client.clone();
        spawn_local(async move {
            let rows = fetch_users(&client, &toasts, move |v| table.update(|t| t.loading = v)).await;
            table.update(|t| t.set_rows(rows));
        });
    });

    let on_edit = Callback::new(move |id: String| table.update(|t| t.begin_edit(&id)));
    let on_save = Callback::new(move |_: User| {
        table.update(|t| {
            t.commit_edit();
        });
        toasts.success(USER_SAVED_MESSAGE);
    });

    view! {
        <PageStatus title="User Management"/>
        <RecordTable title="Users Management" columns=USER_COLUMNS table=table on_edit=on_edit/>
        <EditDialog title="Edit User" fields=USER_EDIT_FIELDS table=table on_save=on_save saving=Signal::stored(false)/>
    }
}
