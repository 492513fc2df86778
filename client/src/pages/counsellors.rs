//! Counsellors management table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every counsellor with client-side paging. Edits go to the backend
//! first and only replace the row once it accepts them; deletes remove the
//! row after the backend confirms.

#[cfg(test)]
#[path = "counsellors_test.rs"]
mod counsellors_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::edit_dialog::EditDialog;
use crate::components::page_status::PageStatus;
use crate::components::record_table::{Column, RecordTable};
use crate::net::api;
use crate::net::client::{ApiClient, Transport};
use crate::net::types::Counsellor;
use crate::state::table::TableState;
use crate::state::toasts::{Notify, ToastState};
use crate::util::async_call::{CallOptions, run_async};

pub const COUNSELLOR_COLUMNS: &[Column] = &[
    Column::text("fullname", "Full Name"),
    Column::text("email", "Email"),
    Column::text("gender", "Gender"),
    Column::number("years_experience", "Experience (yrs)"),
    Column::number("hourly_rate", "Rate (₹/hr)"),
    Column::text("status", "Status"),
];

pub const COUNSELLOR_EDIT_FIELDS: &[&str] = &["fullname", "email", "hourly_rate", "years_experience", "status"];

pub const COUNSELLOR_UPDATED_MESSAGE: &str = "Counsellor updated successfully";
pub const COUNSELLOR_DELETED_MESSAGE: &str = "Counsellor deleted successfully";

pub async fn fetch_counsellors<T: Transport>(
    transport: &T,
    notify: &impl Notify,
    set_loading: impl Fn(bool),
) -> Vec<Counsellor> {
    let options = CallOptions::new().loading(set_loading);
    run_async(notify, options, || api::fetch_all_counsellors(transport)).await.unwrap_or_default()
}

/// Push an edited counsellor to the backend. Returns whether it was accepted.
pub async fn save_counsellor<T: Transport>(
    transport: &T,
    notify: &impl Notify,
    counsellor: &Counsellor,
    set_loading: impl Fn(bool),
) -> bool {
    let options = CallOptions::new().loading(set_loading).success_message(COUNSELLOR_UPDATED_MESSAGE);
    run_async(notify, options, || api::update_counsellor(transport, &counsellor.id, counsellor)).await.is_ok()
}

/// Delete a counsellor. Returns whether the backend confirmed.
pub async fn remove_counsellor<T: Transport>(transport: &T, notify: &impl Notify, id: &str) -> bool {
    let options = CallOptions::new().success_message(COUNSELLOR_DELETED_MESSAGE);
    run_async(notify, options, || api::delete_counsellor(transport, id)).await.is_ok()
}

#[component]
pub fn CounsellorsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<ApiClient>();
    let table = RwSignal::new(TableState::<Counsellor>::default());
    let saving = RwSignal::new(false);

    {
        let client = client.clone();
        Effect::new(move || {
            let client = client.clone();
            spawn_local(async move {
                let rows = fetch_counsellors(&client, &toasts, move |v| table.update(|t| t.loading = v)).await;
                table.update(|t| t.set_rows(rows));
            });
        });
    }

    let on_edit = Callback::new(move |id: String| table.update(|t| t.begin_edit(&id)));

    let save_client = client.clone();
    let on_save = Callback::new(move |counsellor: Counsellor| {
        let client = save_client.clone();
        spawn_local(async move {
            if save_counsellor(&client, &toasts, &counsellor, move |v| saving.set(v)).await {
                table.update(|t| {
                    t.commit_edit();
                });
            }
        });
    });

    let on_delete = Callback::new(move |id: String| {
        let client = client.clone();
        spawn_local(async move {
            if remove_counsellor(&client, &toasts, &id).await {
                table.update(|t| t.remove(&id));
            }
        });
    });

    view! {
        <PageStatus title="Counsellors"/>
        <RecordTable
            title="Counsellors Management"
            columns=COUNSELLOR_COLUMNS
            table=table
            on_edit=on_edit
            on_delete=on_delete
        />
        <EditDialog title="Edit Counsellor" fields=COUNSELLOR_EDIT_FIELDS table=table on_save=on_save saving=saving/>
    }
}
