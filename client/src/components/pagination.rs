//! Pager row under the record tables.

use leptos::prelude::*;

use crate::net::types::EditableRecord;
use crate::state::table::{ROWS_PER_PAGE_OPTIONS, TableState};

/// Rows-per-page selector, range caption and prev/next buttons.
#[component]
pub fn TablePager<T>(table: RwSignal<TableState<T>>) -> impl IntoView
where
    T: EditableRecord,
{
    let on_size_change = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            table.update(|t| t.set_rows_per_page(size));
        }
    };
    let on_prev = move |_| {
        table.update(|t| {
            let page = t.page.saturating_sub(1);
            t.set_page(page);
        });
    };
    let on_next = move |_| {
        table.update(|t| {
            let page = t.page + 1;
            t.set_page(page);
        });
    };

    let options = ROWS_PER_PAGE_OPTIONS
        .iter()
        .map(|size| {
            let size = *size;
            view! {
                <option value=size.to_string() selected=move || table.with(|t| t.rows_per_page == size)>
                    {size.to_string()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="pager">
            <label class="pager__size">
                "Rows per page:"
                <select on:change=on_size_change>{options}</select>
            </label>
            <span class="pager__range">{move || table.with(TableState::range_label)}</span>
            <button
                class="btn pager__prev"
                aria-label="Previous page"
                disabled=move || !table.with(TableState::has_prev)
                on:click=on_prev
            >
                "‹"
            </button>
            <button
                class="btn pager__next"
                aria-label="Next page"
                disabled=move || !table.with(TableState::has_next)
                on:click=on_next
            >
                "›"
            </button>
        </div>
    }
}
