//! Paged table of backend records with per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the users and counsellors screens. Cells come from
//! [`EditableRecord::field`]; the page decides what Edit and Delete do.

use leptos::prelude::*;

use crate::components::pagination::TablePager;
use crate::net::types::EditableRecord;
use crate::state::table::TableState;

/// How a column renders its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Number,
    Chip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: CellKind,
}

impl Column {
    pub const fn text(id: &'static str, label: &'static str) -> Self {
        Self { id, label, kind: CellKind::Text }
    }

    pub const fn number(id: &'static str, label: &'static str) -> Self {
        Self { id, label, kind: CellKind::Number }
    }

    pub const fn chip(id: &'static str, label: &'static str) -> Self {
        Self { id, label, kind: CellKind::Chip }
    }
}

fn render_cell<T: EditableRecord>(row: &T, column: Column) -> AnyView {
    let text = row.field(column.id).unwrap_or_default();
    match column.kind {
        CellKind::Text => view! { <td class="table__cell">{text}</td> }.into_any(),
        CellKind::Number => view! { <td class="table__cell table__cell--number">{text}</td> }.into_any(),
        CellKind::Chip => view! {
            <td class="table__cell">
                <span class="chip">{text}</span>
            </td>
        }
        .into_any(),
    }
}

#[component]
pub fn RecordTable<T>(
    title: &'static str,
    columns: &'static [Column],
    table: RwSignal<TableState<T>>,
    on_edit: Callback<String>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView
where
    T: EditableRecord,
{
    let span = columns.len() + 1;
    let header = columns
        .iter()
        .map(|column| {
            let numeric = column.kind == CellKind::Number;
            view! { <th class="table__head" class:table__head--number=numeric>{column.label}</th> }
        })
        .collect_view();

    let rows = move || {
        table.with(|t| {
            t.visible()
                .iter()
                .map(|row| {
                    let id = row.id().to_owned();
                    let cells = columns.iter().map(|column| render_cell(row, *column)).collect_view();
                    let edit_id = id.clone();
                    view! {
                        <tr class="table__row">
                            {cells}
                            <td class="table__cell table__cell--actions">
                                <button class="btn btn--small" on:click=move |_| on_edit.run(edit_id.clone())>
                                    "Edit"
                                </button>
                                {on_delete
                                    .map(|on_delete| {
                                        view! {
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| on_delete.run(id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        }
                                    })}
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="record-table">
            <h2 class="record-table__title">{title}</h2>
            <div class="record-table__scroll">
                <table class="table">
                    <thead>
                        <tr>
                            {header}
                            <th class="table__head">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !table.with(|t| t.loading)
                            fallback=move || {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--loading" colspan=span>
                                            <span class="spinner" aria-label="Loading"></span>
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            {rows}
                        </Show>
                    </tbody>
                </table>
            </div>
            <TablePager table=table/>
        </section>
    }
}
