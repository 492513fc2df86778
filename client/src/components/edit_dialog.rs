//! Modal form editing one table row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opens while `TableState::editing` holds a copy of a row. Inputs start
//! from that copy and write into it, but are not re-rendered from it while
//! typing. Save hands the copy to the page, which decides whether it goes
//! to the backend before being committed. Cancel and the backdrop drop it.

use leptos::prelude::*;

use crate::net::types::{EditableRecord, field_label, is_numeric_field};
use crate::state::table::TableState;

#[component]
pub fn EditDialog<T>(
    title: &'static str,
    fields: &'static [&'static str],
    table: RwSignal<TableState<T>>,
    on_save: Callback<T>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView
where
    T: EditableRecord,
{
    let error = RwSignal::new(None::<String>);
    let close = move || {
        error.set(None);
        table.update(TableState::cancel_edit);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || error.get_untracked().is_some() {
            return;
        }
        if let Some(record) = table.with_untracked(|t| t.editing.clone()) {
            on_save.run(record);
        }
    };

    let inputs = move || {
        fields
            .iter()
            .map(|name| {
                let name = *name;
                let value = table.with_untracked(|t| t.editing.as_ref().and_then(|r| r.field(name)).unwrap_or_default());
                let on_input = move |ev: leptos::ev::Event| {
                    let raw = event_target_value(&ev);
                    let mut outcome = Ok(());
                    table.update(|t| outcome = t.edit_field(name, &raw));
                    error.set(outcome.err());
                };
                view! {
                    <label class="dialog__field">
                        <span class="dialog__label">{field_label(name)}</span>
                        <input
                            class="dialog__input"
                            type=if is_numeric_field(name) { "number" } else { "text" }
                            prop:value=value
                            on:input=on_input
                        />
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || table.with(|t| t.editing.is_some())>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                    <h2>{title}</h2>
                    <div class="dialog__fields">{inputs()}</div>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
