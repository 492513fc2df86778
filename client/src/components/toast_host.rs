//! Top-right stack of toast notifications.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.items.clone())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier()) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
