//! Form for registering a new counsellor.

#[cfg(test)]
#[path = "add_counsellor_test.rs"]
mod add_counsellor_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_status::PageStatus;
use crate::net::api;
use crate::net::client::{ApiClient, Transport};
use crate::net::types::{Counsellor, EditableRecord, field_label, is_numeric_field};
use crate::state::toasts::{Notify, ToastState};
use crate::util::async_call::{CallOptions, run_async};
use crate::util::validation::validate_email;

pub const COUNSELLOR_FORM_FIELDS: &[&str] = &["fullname", "email", "gender", "years_experience", "hourly_rate", "status"];
pub const COUNSELLOR_ADDED_MESSAGE: &str = "Counsellor added successfully";
const COUNSELLORS_PATH: &str = "/admin/counsellors";

/// Required-field checks before a draft is sent.
///
/// # Errors
///
/// Returns the message to show for the first failing check.
pub fn validate_new_counsellor(draft: &Counsellor) -> Result<(), &'static str> {
    let blank = |value: Option<&str>| value.is_none_or(|v| v.trim().is_empty());
    if blank(draft.fullname.as_deref()) {
        return Err("Full name is required");
    }
    let Some(email) = draft.email.as_deref().filter(|e| !e.trim().is_empty()) else {
        return Err("Email is required");
    };
    validate_email(email).map(|_| ())
}

/// Validate and create the counsellor. Returns whether the backend accepted.
pub async fn submit_counsellor<T: Transport>(
    transport: &T,
    notify: &impl Notify,
    draft: &Counsellor,
    set_loading: impl Fn(bool),
) -> bool {
    if let Err(message) = validate_new_counsellor(draft) {
        notify.error(message);
        return false;
    }
    let options = CallOptions::new().loading(set_loading).success_message(COUNSELLOR_ADDED_MESSAGE);
    run_async(notify, options, || api::create_counsellor(transport, draft)).await.is_ok()
}

#[component]
pub fn AddCounsellorPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let draft = RwSignal::new(Counsellor::default());
    let field_error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        if let Some(message) = field_error.get_untracked() {
            toasts.error(&message);
            return;
        }
        let client = client.clone();
        let navigate = navigate.clone();
        let record = draft.get_untracked();
        spawn_local(async move {
            if submit_counsellor(&client, &toasts, &record, move |v| loading.set(v)).await {
                navigate(COUNSELLORS_PATH, NavigateOptions::default());
            }
        });
    };

    let inputs = COUNSELLOR_FORM_FIELDS
        .iter()
        .map(|name| {
            let name = *name;
            let on_input = move |ev: leptos::ev::Event| {
                let raw = event_target_value(&ev);
                let mut outcome = Ok(());
                draft.update(|d| outcome = d.set_field(name, &raw));
                field_error.set(outcome.err());
            };
            view! {
                <label class="form-field">
                    <span class="form-field__label">{field_label(name)}</span>
                    <input
                        class="form-input"
                        type=if is_numeric_field(name) { "number" } else { "text" }
                        required=matches!(name, "fullname" | "email")
                        prop:value=draft.with_untracked(|d| d.field(name).unwrap_or_default())
                        on:input=on_input
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <PageStatus title="Add Counsellor"/>
        <section class="record-form">
            <h2 class="record-form__title">"Add Counsellor"</h2>
            <form class="record-form__body" on:submit=on_submit>
                {inputs}
                <Show when=move || field_error.get().is_some()>
                    <p class="record-form__error">{move || field_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="record-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Saving..." } else { "Add Counsellor" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
